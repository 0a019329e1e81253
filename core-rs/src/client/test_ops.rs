//! Test operations: create, read, update and delete a demo individual.
//!
//! Only reachable while the test gate is open (`debug && test_mode`); the gate
//! is checked before anything else, so a closed gate never touches the network.

use crate::client::VivoClient;
use crate::envelope::Outcome;
use crate::errors::{Result, VivoError};
use crate::settings::{SettingsSource, VivoConfig};
use crate::sparql::demo::{self, DEMO_INDIVIDUAL_URI, DEMO_LABEL, DEMO_NEW_LABEL};
use crate::sparql::QueryRequest;
use std::fmt;
use std::str::FromStr;

/// One of the four demo operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestOperation {
    Create,
    Read,
    Update,
    Delete,
}

impl TestOperation {
    pub const ALL: [TestOperation; 4] = [
        TestOperation::Create,
        TestOperation::Read,
        TestOperation::Update,
        TestOperation::Delete,
    ];

    pub fn name(self) -> &'static str {
        match self {
            TestOperation::Create => "create",
            TestOperation::Read => "read",
            TestOperation::Update => "update",
            TestOperation::Delete => "delete",
        }
    }

    /// Render the demo SPARQL for this operation against `graph`
    pub fn render(self, graph: &str) -> QueryRequest {
        match self {
            TestOperation::Create => QueryRequest::new(
                demo::insert_individual(graph, DEMO_INDIVIDUAL_URI, DEMO_LABEL).into_string(),
                false,
            ),
            TestOperation::Read => QueryRequest::new(demo::select_graph(graph).into_string(), true),
            TestOperation::Update => QueryRequest::new(
                demo::replace_label(graph, DEMO_INDIVIDUAL_URI, DEMO_NEW_LABEL).into_string(),
                false,
            ),
            TestOperation::Delete => QueryRequest::new(
                demo::delete_label(graph, DEMO_INDIVIDUAL_URI).into_string(),
                false,
            ),
        }
    }
}

impl FromStr for TestOperation {
    type Err = VivoError;

    fn from_str(s: &str) -> Result<Self> {
        TestOperation::ALL
            .into_iter()
            .find(|op| op.name() == s)
            .ok_or_else(|| VivoError::InvalidOperation(s.to_string()))
    }
}

impl fmt::Display for TestOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Guard for every test-only operation and route
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TestGate {
    pub debug: bool,
    pub test_mode: bool,
}

impl TestGate {
    pub fn from_config(config: &VivoConfig) -> Self {
        Self {
            debug: config.debug,
            test_mode: config.test_mode,
        }
    }

    pub fn is_open(&self) -> bool {
        self.debug && self.test_mode
    }

    pub fn check(&self) -> Result<()> {
        if self.is_open() {
            Ok(())
        } else {
            tracing::warn!(debug = self.debug, test_mode = self.test_mode, "test operation refused, test mode is off");
            Err(VivoError::TestModeDisabled)
        }
    }
}

/// Runs demo operations with the configured connection settings
#[derive(Clone)]
pub struct TestRunner {
    client: VivoClient,
    gate: TestGate,
}

impl TestRunner {
    pub fn new(client: VivoClient, gate: TestGate) -> Self {
        Self { client, gate }
    }

    pub fn gate(&self) -> TestGate {
        self.gate
    }

    /// Run the operation named `kind` (`create`, `read`, `update`, `delete`)
    pub async fn run(&self, kind: &str) -> Outcome {
        if let Err(err) = self.gate.check() {
            return err.into();
        }

        let operation = match kind.parse::<TestOperation>() {
            Ok(operation) => operation,
            Err(err) => return err.into(),
        };

        let graph = self.client.defaults().graph.clone().unwrap_or_default();
        tracing::info!(%operation, %graph, "running test operation");

        let request = operation.render(&graph);
        self.client.execute(&request, &SettingsSource::UseDefault).await
    }
}
