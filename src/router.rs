use crate::db::{load_listing_table, Database};
use crate::domain::{FilterCriteria, FilterOptions};
use crate::errors::ServerError;
use crate::forms::SearchForm;
use crate::responses::{html_response, redirect_response, ResultResp};
use crate::session::{SessionHandle, SessionRegistry, SESSION_COOKIE};
use crate::settings::MapSettings;
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::{dashboard_page, DashboardVm};
use astra::{Request, Response};
use http::header::{HeaderValue, COOKIE, SET_COOKIE};
use std::io::Read;

const MAX_FORM_BYTES: u64 = 64 * 1024;

/// Shared by every request the server handles.
pub struct AppContext {
    pub db: Database,
    pub sessions: SessionRegistry,
    pub map: MapSettings,
}

enum Route {
    Dashboard,
    Search,
    Toggle,
    Export,
}

pub fn handle(mut req: Request, ctx: &AppContext) -> ResultResp {
    let route = match (req.method().as_str(), req.uri().path()) {
        ("GET", "/") => Route::Dashboard,
        ("POST", "/search") => Route::Search,
        ("POST", "/toggle") => Route::Toggle,
        ("GET", "/export.xlsx") => Route::Export,
        _ => return Err(ServerError::NotFound),
    };

    let cookie = session_cookie(&req);

    // Only the dashboard and search start sessions.
    match route {
        Route::Dashboard => {
            let session = ctx.sessions.resolve(cookie.as_deref())?;
            with_session_cookie(dashboard(ctx, &session)?, &session)
        }
        Route::Search => {
            let session = ctx.sessions.resolve(cookie.as_deref())?;
            with_session_cookie(search(&mut req, ctx, &session)?, &session)
        }
        Route::Toggle => match ctx.sessions.find(cookie.as_deref())? {
            Some(session) => toggle(ctx, &session),
            None => redirect_response("/"),
        },
        Route::Export => {
            let session = ctx
                .sessions
                .find(cookie.as_deref())?
                .ok_or_else(|| ServerError::BadRequest("Run a search before exporting".into()))?;
            export(ctx, &session)
        }
    }
}

fn dashboard(ctx: &AppContext, session: &SessionHandle) -> ResultResp {
    let table = load_listing_table(&ctx.db);
    let options = FilterOptions::from_listings(&table.listings);

    let markup = ctx.sessions.with_view(session, |view| {
        dashboard_page(&DashboardVm {
            options: &options,
            view,
            map: &ctx.map,
            store_error: table.error.as_deref(),
        })
    })?;

    html_response(markup)
}

fn search(req: &mut Request, ctx: &AppContext, session: &SessionHandle) -> ResultResp {
    let body = read_body(req)?;
    let criteria = FilterCriteria::try_from(SearchForm::parse(&body)?)?;

    // Re-read the store so the search sees the current rows.
    let table = load_listing_table(&ctx.db);

    let found = ctx.sessions.with_view(session, |view| {
        view.search(&table.listings, &criteria);
        view.results().map(|r| (r.filtered.len(), r.mappable.len()))
    })?;

    if let Some((filtered, mappable)) = found {
        log::info!(
            "Search {} {}-{}万円 {:?}: {filtered} match(es), {mappable} on map",
            criteria.district,
            criteria.rent_range.min,
            criteria.rent_range.max,
            criteria.floor_plans,
        );
    }

    redirect_response("/")
}

fn toggle(ctx: &AppContext, session: &SessionHandle) -> ResultResp {
    ctx.sessions.with_view(session, |view| view.toggle_show_all())?;
    redirect_response("/")
}

fn export(ctx: &AppContext, session: &SessionHandle) -> ResultResp {
    let rows = ctx
        .sessions
        .with_view(session, |view| view.visible().map(|v| v.table_rows.to_vec()))?
        .ok_or_else(|| ServerError::BadRequest("Run a search before exporting".into()))?;

    export_listings_xlsx(&rows)
}

fn read_body(req: &mut Request) -> Result<Vec<u8>, ServerError> {
    let mut body = Vec::new();
    req.body_mut()
        .reader()
        .take(MAX_FORM_BYTES)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("Failed to read request body: {e}")))?;
    Ok(body)
}

fn session_cookie(req: &Request) -> Option<String> {
    req.headers()
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|header| header.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == SESSION_COOKIE)
        .map(|(_, value)| value.to_string())
}

fn with_session_cookie(mut resp: Response, session: &SessionHandle) -> ResultResp {
    if session.is_new {
        let cookie =
            HeaderValue::from_str(&session.set_cookie()).map_err(|_| ServerError::InternalError)?;
        resp.headers_mut().append(SET_COOKIE, cookie);
    }
    Ok(resp)
}
