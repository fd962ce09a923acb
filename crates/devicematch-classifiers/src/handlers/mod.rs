//! The family classifiers, grouped by the shape of their claim and match
//! logic: table-driven vendor handsets, the richer mobile families, the
//! Android and Apple ecosystems, disguised and set-top devices, desktop
//! browsers and the terminal catch-all.

pub mod android;
pub mod apple;
pub mod catch_all;
pub mod desktop;
pub mod mobile;
pub mod special;
pub mod vendor;
