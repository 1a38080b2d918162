pub mod html;
pub mod redirect;
pub mod xlsx;

pub use crate::errors::ResultResp;

pub use html::html_response;
pub use redirect::redirect_response;
pub use xlsx::xlsx_response;
