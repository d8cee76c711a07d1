//! Path-based scanning: errors, isolation between calls and agreement
//! across the three tag spellings.

#![allow(clippy::unwrap_used)]

use bpmn_scan::scan::ListenerKind;
use bpmn_scan::{BpmnScanner, NamespaceProfile, ScanError, ScanOptions, Session};
use rstest::rstest;

use crate::helpers::model_fixtures::{order_process_file, write_model};

const IDS: &[&str] = &[
    "Process_1",
    "StartEvent_1",
    "Gateway_1",
    "Gateway_Empty",
    "Flow_1",
    "Flow_2",
    "Flow_3",
    "Flow_4",
    "Task_Class",
    "Task_Plain",
    "Task_Expr",
    "Task_Delegate",
    "Task_External",
    "Task_Rule",
    "Task_Send",
    "UserTask_1",
    "Timer_Catch",
    "Boundary_1",
    "End_1",
    "End_Plain",
    "Missing",
];

/// Everything the resolvers report about one id, with profile-specific tag
/// spellings reduced to local names.
#[derive(Debug, PartialEq)]
struct Facts {
    implementation: Option<String>,
    event_implementation: Option<String>,
    execution_listeners: Vec<String>,
    task_listeners: Vec<String>,
    script_parents: Vec<String>,
    script_condition: bool,
    gateway: Option<String>,
    outgoing_count: usize,
    outgoing_edges: Vec<String>,
    timers: Vec<(String, Option<String>)>,
}

fn facts(session: &Session, id: &str) -> Facts {
    Facts {
        implementation: session
            .task_implementation(id)
            .unwrap()
            .map(|kind| kind.to_string()),
        event_implementation: session.event_implementation(id).unwrap(),
        execution_listeners: session
            .listeners_of_kind(id, ListenerKind::Execution, "class")
            .unwrap()
            .into_iter()
            .map(|entry| entry.value)
            .collect(),
        task_listeners: session
            .listeners_of_kind(id, ListenerKind::Task, "class")
            .unwrap()
            .into_iter()
            .map(|entry| entry.value)
            .collect(),
        script_parents: session
            .script_parents(id)
            .into_iter()
            .map(|parent| parent.to_string())
            .collect(),
        script_condition: session.has_script_condition(id).unwrap(),
        gateway: session.exclusive_gateway(id).unwrap(),
        outgoing_count: session.outgoing_count(id).unwrap(),
        outgoing_edges: session
            .outgoing_edges(id)
            .unwrap()
            .iter()
            .filter_map(|edge| edge.element_id().map(str::to_owned))
            .collect(),
        timers: session
            .timers(id)
            .unwrap()
            .values()
            .map(|timer| {
                (
                    timer.event.local_name().to_owned(),
                    timer.detail.as_ref().map(|detail| detail.text.clone()),
                )
            })
            .collect(),
    }
}

#[test]
fn test_profiles_agree() {
    let scanner = BpmnScanner::new();
    let files: Vec<_> = NamespaceProfile::PROBE_ORDER
        .into_iter()
        .map(order_process_file)
        .collect();
    let sessions: Vec<_> = files
        .iter()
        .map(|file| scanner.session(&file.path).unwrap())
        .collect();

    for id in IDS {
        let legacy = facts(&sessions[0], id);
        for session in &sessions[1..] {
            assert_eq!(facts(session, id), legacy, "{id} differs");
        }
    }
}

#[rstest]
fn test_path_calls_match_session(
    #[values(
        NamespaceProfile::Legacy,
        NamespaceProfile::Bpmn2,
        NamespaceProfile::Unprefixed
    )]
    profile: NamespaceProfile,
) {
    let file = order_process_file(profile);
    let scanner = BpmnScanner::new();
    let session = scanner.session(&file.path).unwrap();

    assert_eq!(scanner.profile(&file.path).unwrap(), profile);
    assert_eq!(
        scanner.task_implementation(&file.path, "Task_Rule").unwrap(),
        session.task_implementation("Task_Rule").unwrap()
    );
    assert_eq!(
        scanner.event_implementation(&file.path, "End_1").unwrap(),
        session.event_implementation("End_1").unwrap()
    );
    assert_eq!(
        scanner
            .listeners(&file.path, "UserTask_1", "camunda:taskListener", "event")
            .unwrap(),
        session
            .listeners("UserTask_1", "camunda:taskListener", "event")
            .unwrap()
    );
    assert_eq!(
        scanner.form_key(&file.path, "UserTask_1", "userTask").unwrap(),
        session.form_key("UserTask_1", "userTask").unwrap()
    );
    assert_eq!(
        scanner.script_parents(&file.path, "Task_Class").unwrap(),
        session.script_parents("Task_Class")
    );
    assert_eq!(
        scanner.has_script_condition(&file.path, "Flow_2").unwrap(),
        session.has_script_condition("Flow_2").unwrap()
    );
    assert_eq!(
        scanner.exclusive_gateway(&file.path, "Gateway_1").unwrap(),
        session.exclusive_gateway("Gateway_1").unwrap()
    );
    assert_eq!(
        scanner.outgoing_count(&file.path, "Gateway_1").unwrap(),
        session.outgoing_count("Gateway_1").unwrap()
    );
    assert_eq!(
        scanner.outgoing_edges(&file.path, "Gateway_1").unwrap(),
        session.outgoing_edges("Gateway_1").unwrap()
    );
    assert_eq!(
        scanner.timers(&file.path, "Timer_Catch").unwrap(),
        session.timers("Timer_Catch").unwrap()
    );
}

#[test]
fn test_repeated_calls_are_independent() {
    let legacy = order_process_file(NamespaceProfile::Legacy);
    let bpmn2 = order_process_file(NamespaceProfile::Bpmn2);
    let scanner = BpmnScanner::new();

    let first = scanner.outgoing_edges(&legacy.path, "Gateway_1").unwrap();
    // A call on a differently spelled model in between must not leak into
    // the next call on the first one.
    let other = scanner.outgoing_edges(&bpmn2.path, "Gateway_1").unwrap();
    let second = scanner.outgoing_edges(&legacy.path, "Gateway_1").unwrap();

    assert_eq!(first, second);
    assert_eq!(first[0].name, "bpmn:sequenceFlow");
    assert_eq!(other[0].name, "bpmn2:sequenceFlow");
}

#[test]
fn test_missing_file() {
    let file = write_model("present.bpmn", "<definitions/>");
    let absent = file.path.with_file_name("absent.bpmn");
    let result = BpmnScanner::new().task_implementation(&absent, "Task_1");
    assert!(matches!(result, Err(ScanError::Io(_))));
}

#[rstest]
#[case("<bpmn:definitions><bpmn:process></bpmn:definitions>")]
#[case("<bpmn:definitions id=\"a\" id=\"b\"/>")]
#[case("")]
fn test_malformed_document(#[case] content: &str) {
    let file = write_model("broken.bpmn", content);
    let result = BpmnScanner::new().outgoing_count(&file.path, "Gateway_1");
    assert!(
        matches!(result, Err(ScanError::Xml(_))),
        "expected an XML error, got {result:?}"
    );
}

#[test]
fn test_model_in_declared_encoding() {
    let file = write_model(
        "latin1.bpmn",
        b"<?xml version=\"1.0\" encoding=\"ISO-8859-1\"?>\n\
<bpmn:definitions><bpmn:process id=\"P\">\
<bpmn:serviceTask id=\"Task_Pr\xFCfen\" camunda:class=\"a.B\"/>\
</bpmn:process></bpmn:definitions>",
    );
    assert_eq!(
        BpmnScanner::new()
            .task_implementation(&file.path, "Task_Prüfen")
            .unwrap(),
        Some(bpmn_scan::ImplementationKind::ClassName)
    );
}

#[test]
fn test_unknown_profile() {
    let file = write_model(
        "foreign.bpmn",
        r#"<semantic:definitions>
          <semantic:serviceTask id="Task_1" camunda:class="a.B">
            <camunda:script>1</camunda:script>
          </semantic:serviceTask>
        </semantic:definitions>"#,
    );
    let scanner = BpmnScanner::new();

    assert!(matches!(
        scanner.profile(&file.path),
        Err(ScanError::UnknownProfile)
    ));
    assert!(matches!(
        scanner.task_implementation(&file.path, "Task_1"),
        Err(ScanError::UnknownProfile)
    ));
    assert!(matches!(
        scanner.outgoing_count(&file.path, "Gateway_1"),
        Err(ScanError::UnknownProfile)
    ));
    assert!(matches!(
        scanner.timers(&file.path, "Task_1"),
        Err(ScanError::UnknownProfile)
    ));
    // Script lookup does not depend on the tag spelling.
    assert_eq!(
        scanner.script_parents(&file.path, "Task_1").unwrap(),
        ["serviceTask"]
    );
}

#[test]
fn test_custom_extension_prefix() {
    let file = write_model(
        "flowable.bpmn",
        r#"<definitions>
          <process id="Process_1">
            <serviceTask id="Task_1" flowable:delegateExpression="${ship}" camunda:class="a.B">
              <extensionElements>
                <flowable:executionListener class="a.Listener"/>
              </extensionElements>
            </serviceTask>
          </process>
        </definitions>"#,
    );
    let scanner = BpmnScanner::with_options(ScanOptions::new().with_extension_prefix("flowable"));
    let session = scanner.session(&file.path).unwrap();

    assert_eq!(
        session.task_implementation("Task_1").unwrap(),
        Some(bpmn_scan::ImplementationKind::DelegateExpression)
    );
    let listeners = session
        .listeners_of_kind("Task_1", ListenerKind::Execution, "class")
        .unwrap();
    assert_eq!(listeners.len(), 1);
    assert_eq!(listeners[0].listener, "flowable:executionListener");
}
