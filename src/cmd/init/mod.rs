//! `wayfinder init`: generate a starter route table file.
//!
//! Supports two modes:
//! - **Template mode** (default): writes a static template file.
//! - **Interactive mode** (`--interactive`): walks through a step-by-step wizard.

mod interactive;
mod serialize;
mod template;

use crate::cli::InitArgs;
use crate::error::WayfinderError;

pub fn execute(args: &InitArgs) -> Result<(), WayfinderError> {
    if args.interactive {
        interactive::run(args)
    } else {
        template::run(args)
    }
}
