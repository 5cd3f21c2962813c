// src/constants.rs

/// Size of the virtual product collection served by `/get-products`.
pub const PRODUCT_COUNT: usize = 102;

/// Page size used when a request omits `limit` or sends something non-numeric.
pub const DEFAULT_PAGE_LIMIT: usize = 20;

/// Default bind host.
pub const DEFAULT_HOST: &str = "localhost";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 3000;

/// Directory (relative to the working directory) mounted under `/assets/`.
pub const DEFAULT_ASSETS_DIR: &str = "assets";

/// URL prefix of the static file mount.
pub const ASSETS_ROUTE: &str = "/assets";

/// Path (below the public base URL) of the image shared by every product.
pub const PRODUCT_IMAGE_PATH: &str = "/assets/images/products/product.jpg";

/// Number of banners returned by `/get-banners`.
pub const BANNER_COUNT: usize = 5;

/// Credentials accepted by `/login`.
pub const LOGIN_USERNAME: &str = "admin";
pub const LOGIN_PASSWORD: &str = "123456";

/// Envelope codes and messages.
pub const SUCCESS_CODE: &str = "0";
pub const SUCCESS_MESSAGE: &str = "success";
pub const ERROR_CODE: &str = "-1";
