// src/forms.rs
use crate::domain::{FilterCriteria, RentRange};
use crate::errors::ServerError;
use serde::Deserialize;

/// Body of `POST /search`. `plan` repeats once per checked floor plan.
#[derive(Debug, Deserialize)]
pub struct SearchForm {
    pub district: String,
    pub rent_min: f64,
    pub rent_max: f64,
    #[serde(default)]
    pub plan: Vec<String>,
}

impl SearchForm {
    pub fn parse(body: &[u8]) -> Result<Self, ServerError> {
        serde_html_form::from_bytes(body)
            .map_err(|e| ServerError::BadRequest(format!("Invalid search form: {e}")))
    }
}

impl TryFrom<SearchForm> for FilterCriteria {
    type Error = ServerError;

    fn try_from(form: SearchForm) -> Result<Self, Self::Error> {
        if form.district.trim().is_empty() {
            return Err(ServerError::BadRequest("Select a district".into()));
        }

        let rent_range = RentRange::new(form.rent_min, form.rent_max).ok_or_else(|| {
            ServerError::BadRequest(format!(
                "Invalid rent range: {} - {}",
                form.rent_min, form.rent_max
            ))
        })?;

        Ok(FilterCriteria {
            district: form.district,
            rent_range,
            floor_plans: form.plan.into_iter().collect(),
        })
    }
}
