//! checkresults XML document.
//!
//! Produces the payload sent as `XMLDATA`:
//!
//! ```text
//! <?xml version="1.0" encoding="UTF-8"?>
//! <checkresults>
//!   <checkresult type="service" checktype="1">
//!     <hostname>web01</hostname>
//!     <servicename>HTTP</servicename>
//!     <state>0</state>
//!     <output>OK | 'latency'=12.5ms;50;100;;</output>
//!   </checkresult>
//! </checkresults>
//! ```

mod builder;

pub use builder::{build_document, build_document_string};

/// `checktype` attribute value marking a result as passive
pub const CHECK_TYPE_PASSIVE: &str = "1";

/// Spaces per nesting level in the rendered document
const INDENT_WIDTH: usize = 2;
