//! Configuration section definitions.
//!
//! Each module corresponds to a section in `folio.toml`:
//!
//! | Module      | TOML Section    | Purpose                              |
//! |-------------|-----------------|--------------------------------------|
//! | `analytics` | `[analytics]`   | Umami analytics host and website id  |
//! | `author`    | `[author]`      | Author identity and social handles   |
//! | `build`     | `[build]`       | Output directory, clean flag         |
//! | `music`     | `[music]`       | Embedded track list                  |
//! | `site`      | `[site]`        | Site title, description, url         |

mod analytics;
mod author;
mod build;
mod music;
mod site;

pub use analytics::AnalyticsConfig;
pub use author::AuthorConfig;
pub use build::BuildConfig;
pub use music::MusicConfig;
pub use site::SiteInfoConfig;
