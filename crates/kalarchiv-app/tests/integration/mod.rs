//! End-to-end tests for `kalarchiv_app::pipeline`.
//!
//! Every test works in its own `tempfile` directory, so they can run in
//! parallel:
//!
//! ```sh
//! cargo test -p kalarchiv-app --test archive_integration
//! ```

mod helpers;
mod pipeline;
mod round_trip;
