mod report_assembler;
mod trail_resolver;

pub use report_assembler::ReportAssembler;
pub use trail_resolver::{ResolutionOutcome, TrailResolver, TrailSearch};
