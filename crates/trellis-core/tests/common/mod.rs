#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use async_trait::async_trait;
use trellis_core::oracle::{
    DecomposeRequest, DecomposeResponse, ExecuteRequest, ExecuteResponse, Oracle,
};
use trellis_core::{Planner, PlannerBuilder, TreeData};

/// Scripted oracle double shared by the integration tests.
#[derive(Default)]
pub struct StubOracle {
    decompose_responses: Mutex<VecDeque<anyhow::Result<DecomposeResponse>>>,
    execute_responses: Mutex<VecDeque<anyhow::Result<ExecuteResponse>>>,
    execute_requests: Mutex<Vec<ExecuteRequest>>,
}

impl StubOracle {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_decompose(&self, response: anyhow::Result<DecomposeResponse>) {
        self.decompose_responses.lock().unwrap().push_back(response);
    }

    pub fn push_execute(&self, response: anyhow::Result<ExecuteResponse>) {
        self.execute_responses.lock().unwrap().push_back(response);
    }

    pub fn last_execute_request(&self) -> Option<ExecuteRequest> {
        self.execute_requests.lock().unwrap().last().cloned()
    }
}

#[async_trait]
impl Oracle for StubOracle {
    async fn decompose(&self, _request: DecomposeRequest) -> anyhow::Result<DecomposeResponse> {
        self.decompose_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted decompose response")))
    }

    async fn execute(&self, request: ExecuteRequest) -> anyhow::Result<ExecuteResponse> {
        self.execute_requests.lock().unwrap().push(request);
        self.execute_responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow!("no scripted execute response")))
    }
}

/// Helper function to create a test planner over a fresh stub oracle
pub fn create_test_planner() -> (Arc<StubOracle>, Planner) {
    let oracle = StubOracle::new();
    let planner = PlannerBuilder::new()
        .with_oracle(oracle.clone())
        .build()
        .expect("Failed to create planner");
    (oracle, planner)
}

/// Asserts the forest invariant over the whole aggregate: every root
/// exists with no parent, every child edge has a consistent
/// back-reference, and every node is reachable as either a root or as
/// exactly one parent's child.
pub fn assert_consistent(tree: &TreeData) {
    for root_id in &tree.root_node_ids {
        let root = tree
            .nodes
            .get(root_id)
            .unwrap_or_else(|| panic!("root {root_id} missing from nodes"));
        assert_eq!(root.parent_id, None, "root {root_id} has a parent");
    }

    for (id, node) in &tree.nodes {
        assert_eq!(id, &node.id, "map key and node id diverge for {id}");
        for child_id in &node.children_ids {
            let child = tree
                .nodes
                .get(child_id)
                .unwrap_or_else(|| panic!("child {child_id} of {id} missing from nodes"));
            assert_eq!(
                child.parent_id.as_deref(),
                Some(id.as_str()),
                "child {child_id} does not back-reference {id}"
            );
        }

        match &node.parent_id {
            None => assert!(
                tree.root_node_ids.contains(id),
                "parentless node {id} missing from rootNodeIds"
            ),
            Some(parent_id) => {
                let parent = tree
                    .nodes
                    .get(parent_id)
                    .unwrap_or_else(|| panic!("parent {parent_id} of {id} missing from nodes"));
                let memberships = parent
                    .children_ids
                    .iter()
                    .filter(|child_id| *child_id == id)
                    .count();
                assert_eq!(memberships, 1, "node {id} not exactly once in its parent");
            }
        }
    }
}
