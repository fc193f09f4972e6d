pub mod api_errors;
pub mod openpix;
pub mod storefront;
