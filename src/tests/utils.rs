use crate::db::connection::{initialize_store, Database};
use crate::router::AppContext;
use crate::session::SessionRegistry;
use crate::settings::MapSettings;
use astra::{Body, Request, Response};
use http::Method;
use rusqlite::{params, Connection};
use std::fs;
use std::io::Read;
use std::ops::Deref;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static DB_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Unique, not-yet-existing SQLite path under the temp dir.
pub fn temp_db_path(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "room_finder_{label}_{}_{}_{}.sqlite",
        std::process::id(),
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos(),
        DB_COUNTER.fetch_add(1, Ordering::SeqCst)
    ))
}

/// Temp SQLite store that is deleted when dropped.
pub struct TestDb {
    db: Database,
}

impl TestDb {
    /// A store location with no file behind it yet.
    pub fn new(label: &str) -> Self {
        Self {
            db: Database::new(temp_db_path(label)),
        }
    }
}

impl Deref for TestDb {
    type Target = Database;

    fn deref(&self) -> &Database {
        &self.db
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        let path = self.db.path();
        let _ = fs::remove_file(path);
        for suffix in ["-journal", "-wal", "-shm"] {
            let mut side = path.as_os_str().to_owned();
            side.push(suffix);
            let _ = fs::remove_file(side);
        }
    }
}

/// Initialize a fresh store using the production schema
pub fn init_test_db(label: &str) -> TestDb {
    let db = TestDb::new(label);
    initialize_store(&db).unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

/// An `AppContext` that owns its store file for the length of a test.
pub struct TestContext {
    ctx: AppContext,
    _db: TestDb,
}

impl Deref for TestContext {
    type Target = AppContext;

    fn deref(&self) -> &AppContext {
        &self.ctx
    }
}

pub fn test_context(db: TestDb) -> TestContext {
    TestContext {
        ctx: AppContext {
            db: db.db.clone(),
            sessions: SessionRegistry::new(Duration::from_secs(3600), 100),
            map: MapSettings::default(),
        },
        _db: db,
    }
}

/// A row to insert; rent is stored as text so REAL affinity decides its type.
pub struct NewRoom {
    pub name: String,
    pub district: String,
    pub rent: String,
    pub floor_plan: String,
    pub coords: Option<(f64, f64)>,
}

impl NewRoom {
    pub fn new(district: &str, rent: &str, floor_plan: &str) -> Self {
        Self {
            name: format!("{district} {floor_plan} {rent}"),
            district: district.to_string(),
            rent: rent.to_string(),
            floor_plan: floor_plan.to_string(),
            coords: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn at(mut self, lat: f64, lon: f64) -> Self {
        self.coords = Some((lat, lon));
        self
    }
}

pub fn insert_listing(db: &Database, room: &NewRoom) {
    let conn = Connection::open(db.path()).expect("open test db");
    conn.execute(
        "INSERT INTO room_ver2 (名称, アドレス, 階数, 家賃, 間取り, 物件詳細URL, 緯度, 経度, 区)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            room.name,
            format!("東京都{}1-2-3", room.district),
            "2階",
            room.rent,
            room.floor_plan,
            format!("https://example.com/rooms/{}", room.name),
            room.coords.map(|c| c.0),
            room.coords.map(|c| c.1),
            room.district,
        ],
    )
    .expect("insert listing");
}

pub fn get(uri: &str, cookie: Option<&str>) -> Request {
    request(Method::GET, uri, cookie, Body::empty())
}

pub fn post_form(uri: &str, cookie: Option<&str>, form: &str) -> Request {
    let mut req = request(Method::POST, uri, cookie, Body::from(form.to_string()));
    req.headers_mut().insert(
        "Content-Type",
        "application/x-www-form-urlencoded".parse().unwrap(),
    );
    req
}

fn request(method: Method, uri: &str, cookie: Option<&str>, body: Body) -> Request {
    let mut builder = http::Request::builder().method(method).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header("Cookie", cookie);
    }
    builder.body(body).unwrap()
}

/// `session=<token>` taken from the response's Set-Cookie header.
pub fn session_cookie_of(resp: &Response) -> Option<String> {
    let header = resp.headers().get("Set-Cookie")?.to_str().ok()?;
    header.split(';').next().map(|pair| pair.trim().to_string())
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
