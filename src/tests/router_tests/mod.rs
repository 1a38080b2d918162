mod dashboard_tests;
mod export_tests;
mod session_tests;
