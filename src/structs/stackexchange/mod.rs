pub mod answer;
pub mod api_page;
pub mod question;
