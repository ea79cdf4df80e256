// Analysis API: fetch a page, extract its tags, score them.
// Extraction lives in `extraction`, scoring in `scoring`; this module only wires them to HTTP.

pub mod handlers;
