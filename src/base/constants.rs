//! Local names and attribute names the resolvers look for.
//!
//! BPMN names are local names; the active [`NamespaceProfile`](super::NamespaceProfile)
//! supplies the prefix. Vendor names are qualified with
//! [`ScanOptions::extension_prefix`](super::ScanOptions::extension_prefix).

/// Root element probed to detect the namespace profile.
pub const DEFINITIONS: &str = "definitions";

/// Ancestor walks for script ownership never cross this element.
pub const PROCESS: &str = "process";

pub const MESSAGE_EVENT_DEFINITION: &str = "messageEventDefinition";
pub const TIMER_EVENT_DEFINITION: &str = "timerEventDefinition";
pub const CONDITION_EXPRESSION: &str = "conditionExpression";

/// Unqualified attributes.
pub const ID: &str = "id";
pub const NAME: &str = "name";
pub const LANGUAGE: &str = "language";

/// Default vendor extension prefix.
pub const DEFAULT_EXTENSION_PREFIX: &str = "camunda";

// Vendor attributes selecting how a task is invoked.
pub const CLASS: &str = "class";
pub const EXPRESSION: &str = "expression";
pub const DELEGATE_EXPRESSION: &str = "delegateExpression";
pub const DECISION_REF: &str = "decisionRef";
pub const CONNECTOR_TYPE: &str = "type";

// Other vendor names.
pub const SCRIPT: &str = "script";
pub const FORM_KEY: &str = "formKey";
pub const EXECUTION_LISTENER: &str = "executionListener";
pub const TASK_LISTENER: &str = "taskListener";

/// File extension of BPMN model files.
pub const MODEL_EXTENSION: &str = "bpmn";
