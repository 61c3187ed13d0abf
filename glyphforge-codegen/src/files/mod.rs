//! Generated file templates.

mod component_tsx;
mod icons_json;
mod index_ts;

pub use component_tsx::ComponentTsx;
pub use icons_json::IconsJson;
pub use index_ts::IndexTs;
