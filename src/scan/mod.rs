//! Model introspection: semantic facts about one element of a BPMN model.
//!
//! Each resolver takes an element id and answers one question about the
//! element, independent of which tag spelling the model uses:
//!
//! | Resolver | Question |
//! |---|---|
//! | [`Session::task_implementation`] | How is the task invoked? |
//! | [`Session::event_implementation`] | Which message expression does the event throw? |
//! | [`Session::listeners`] | Which listeners does the element declare? |
//! | [`Session::form_key`] | Which form file does the element reference? |
//! | [`Session::script_parents`] | Where does the element embed inline scripts? |
//! | [`Session::has_script_condition`] | Is the flow's condition a script? |
//! | [`Session::exclusive_gateway`], [`Session::outgoing_count`], [`Session::outgoing_edges`] | Where does the gateway branch to? |
//! | [`Session::timers`] | Which timer does the event wait for? |
//!
//! ## Usage
//!
//! ```ignore
//! use bpmn_scan::scan::{BpmnScanner, ImplementationKind};
//!
//! // One parse per call
//! let scanner = BpmnScanner::new();
//! let kind = scanner.task_implementation("order.bpmn", "ServiceTask_Ship")?;
//!
//! // One parse, many queries
//! let session = scanner.session("order.bpmn")?;
//! for edge in session.outgoing_edges("Gateway_Approved")? {
//!     println!("{:?}", edge.element_id());
//! }
//! ```
//!
//! Missing elements are reported as `None` or an empty collection. Errors are
//! reserved for unreadable or malformed documents and documents whose
//! namespace profile cannot be determined.

mod form;
mod gateway;
mod implementation;
mod listener;
mod profile;
mod scanner;
mod script;
mod session;
mod timer;

pub use form::form_file_name;
pub use implementation::ImplementationKind;
pub use listener::{ListenerEntry, ListenerKind};
pub use profile::{detect_profile, resolve_profile};
pub use scanner::BpmnScanner;
pub use session::Session;
pub use timer::{TimerDetail, Timers};
