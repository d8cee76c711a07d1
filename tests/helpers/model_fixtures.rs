//! BPMN model fixtures, rendered once per namespace profile.

use std::fs;
use std::path::PathBuf;

use bpmn_scan::NamespaceProfile;
use tempfile::TempDir;

/// Order-fulfilment model exercising every resolver.
///
/// `{p}` stands for the BPMN tag prefix including the colon, `{ns}` for the
/// matching namespace declaration.
const ORDER_PROCESS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<{p}definitions{ns} xmlns:camunda="http://camunda.org/schema/1.0/bpmn" xmlns:bpmndi="http://www.omg.org/spec/BPMN/20100524/DI" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance" id="Definitions_1" targetNamespace="http://bpmn.io/schema/bpmn">
  <{p}process id="Process_1" isExecutable="true">
    <{p}extensionElements>
      <camunda:executionListener event="start">
        <camunda:script scriptFormat="groovy">println 'process started'</camunda:script>
      </camunda:executionListener>
    </{p}extensionElements>
    <{p}startEvent id="StartEvent_1" name="Order received" camunda:formKey="embedded:app:forms/start.html">
      <{p}outgoing>Flow_1</{p}outgoing>
      <{p}timerEventDefinition id="TimerDef_Start">
        <{p}timeDuration xsi:type="{p}tFormalExpression">PT5M</{p}timeDuration>
      </{p}timerEventDefinition>
    </{p}startEvent>
    <{p}exclusiveGateway id="Gateway_1" name="In stock?">
      <{p}incoming>Flow_1</{p}incoming>
      <{p}outgoing>Flow_2</{p}outgoing>
      <{p}outgoing>
        Flow_3
      </{p}outgoing>
      <{p}outgoing>Flow_missing</{p}outgoing>
    </{p}exclusiveGateway>
    <{p}exclusiveGateway id="Gateway_Empty"/>
    <{p}sequenceFlow id="Flow_1" sourceRef="StartEvent_1" targetRef="Gateway_1"/>
    <{p}sequenceFlow id="Flow_2" name="yes" sourceRef="Gateway_1" targetRef="Task_Class">
      <{p}conditionExpression xsi:type="{p}tFormalExpression" language="groovy">stock &gt; 0</{p}conditionExpression>
    </{p}sequenceFlow>
    <{p}sequenceFlow id="Flow_3" name="no" sourceRef="Gateway_1" targetRef="UserTask_1">
      <{p}conditionExpression xsi:type="{p}tFormalExpression" language="  ">${stock == 0}</{p}conditionExpression>
    </{p}sequenceFlow>
    <{p}sequenceFlow id="Flow_4" sourceRef="Task_Class" targetRef="End_1"/>
    <{p}serviceTask id="Task_Class" name="Ship order" camunda:class="com.example.ShipDelegate">
      <{p}extensionElements>
        <camunda:executionListener class="com.example.AuditListener" event="start"/>
        <camunda:executionListener event="end">
          <camunda:script scriptFormat="groovy">println 'shipped'</camunda:script>
        </camunda:executionListener>
        <camunda:inputOutput>
          <camunda:inputParameter name="carrier">
            <camunda:script scriptFormat="javascript">'DHL'</camunda:script>
          </camunda:inputParameter>
        </camunda:inputOutput>
      </{p}extensionElements>
      <{p}incoming>Flow_2</{p}incoming>
      <{p}outgoing>Flow_4</{p}outgoing>
    </{p}serviceTask>
    <{p}serviceTask id="Task_Plain" name="Pack"/>
    <{p}serviceTask id="Task_Expr" camunda:expression="${shipping.run(execution)}"/>
    <{p}serviceTask id="Task_Delegate" camunda:delegateExpression="${shipDelegate}"/>
    <{p}serviceTask id="Task_External" camunda:type="external" camunda:topic="shipping"/>
    <{p}businessRuleTask id="Task_Rule" camunda:decisionRef="approve-order"/>
    <{p}sendTask id="Task_Send" camunda:class="com.example.NotifyDelegate"/>
    <{p}userTask id="UserTask_1" name="Review" camunda:formKey="app:forms/review.html">
      <{p}extensionElements>
        <camunda:taskListener event="create" class="com.example.AssignListener"/>
      </{p}extensionElements>
    </{p}userTask>
    <{p}intermediateCatchEvent id="Timer_Catch">
      <{p}timerEventDefinition>
        <{p}timeDate>2026-01-01T00:00:00Z</{p}timeDate>
        <{p}timeCycle>R3/PT10H</{p}timeCycle>
      </{p}timerEventDefinition>
    </{p}intermediateCatchEvent>
    <{p}boundaryEvent id="Boundary_1" attachedToRef="Task_Plain">
      <{p}timerEventDefinition/>
    </{p}boundaryEvent>
    <{p}endEvent id="End_1">
      <{p}incoming>Flow_4</{p}incoming>
      <{p}messageEventDefinition camunda:expression="${notifier.send(execution)}"/>
    </{p}endEvent>
    <{p}endEvent id="End_Plain"/>
  </{p}process>
  <bpmndi:BPMNDiagram id="Diagram_1">
    <bpmndi:BPMNPlane id="Plane_1" bpmnElement="Process_1">
      <bpmndi:BPMNShape id="Shape_Task_Class" bpmnElement="Task_Class"/>
    </bpmndi:BPMNPlane>
  </bpmndi:BPMNDiagram>
</{p}definitions>
"#;

/// The order model spelled under `profile`.
pub fn order_process(profile: NamespaceProfile) -> String {
    let (prefix, namespace) = match profile.prefix() {
        Some(prefix) => (
            format!("{prefix}:"),
            format!(r#" xmlns:{prefix}="http://www.omg.org/spec/BPMN/20100524/MODEL""#),
        ),
        None => (
            String::new(),
            r#" xmlns="http://www.omg.org/spec/BPMN/20100524/MODEL""#.to_string(),
        ),
    };
    ORDER_PROCESS
        .replace("{ns}", &namespace)
        .replace("{p}", &prefix)
}

/// A model file on disk, removed when dropped.
pub struct ModelFile {
    _dir: TempDir,
    pub path: PathBuf,
}

/// Write `content` to `name` inside a fresh temporary directory.
pub fn write_model(name: &str, content: impl AsRef<[u8]>) -> ModelFile {
    let dir = TempDir::new().expect("create temp dir");
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write model");
    ModelFile { _dir: dir, path }
}

/// The order model on disk, spelled under `profile`.
pub fn order_process_file(profile: NamespaceProfile) -> ModelFile {
    write_model("order.bpmn", &order_process(profile))
}
