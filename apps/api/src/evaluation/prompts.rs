// Prompt constants for the Resume Evaluator.
// The numbered section between them is filled from the prompt store at
// request time.

/// Short instruction sent as the first part of every evaluation call.
pub const ANALYZE_INSTRUCTION: &str = "Analyze this resume carefully:";

/// Opening line of the master instruction.
pub const MASTER_INSTRUCTION_PREAMBLE: &str =
    "You are a highly skilled HR professional, career coach, and ATS expert.";

/// Fixed boilerplate closing the master instruction.
pub const MASTER_INSTRUCTION_REPORT_REQUEST: &str = "Provide a detailed report that includes:\n\
     - Job-fit analysis\n\
     - Improvement suggestions";
