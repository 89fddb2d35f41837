// Core modules shared by the accessor, the host seam, and the CLI.
pub mod error;
