//! Reusable presentational components.
//!
//! Each component renders a self-contained HTML fragment from plain
//! values. None of them read config directly; pages pass data down.
//!
//! | Component      | Output                                        |
//! |----------------|-----------------------------------------------|
//! | `alert`        | Info box with `role="alert"`                  |
//! | `frame`        | Bordered example frame with a title badge     |
//! | `image`        | `<img>` with size, lazy loading, placeholder  |
//! | `seo`          | `<title>`, description, Open Graph, Twitter   |
//! | `social`       | Social profile icon links                     |

pub mod alert;
pub mod frame;
pub mod image;
pub mod seo;
pub mod social;

pub use alert::Alert;
pub use frame::ExampleFrame;
pub use image::Image;
pub use seo::PageSeo;
pub use social::{SocialIcon, SocialKind};
