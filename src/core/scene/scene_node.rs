//=========================================================================
// Scene History
//=========================================================================
//
// Navigation history of activated scenes.
//
// Each activation pushes a `SceneNode`; the node below the top is the
// previous scene. Going back pops the top node, so history behaves as a
// stack, never a ring. An optional limit drops the oldest entries.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::fmt;
use std::rc::Rc;

use log::debug;

//=== Internal Dependencies ===============================================

use super::SceneRef;

//=== SceneNode ===========================================================

/// History entry wrapping an activated scene.
#[derive(Clone)]
pub struct SceneNode {
    scene: SceneRef,
}

impl SceneNode {
    pub fn new(scene: SceneRef) -> Self {
        Self { scene }
    }

    pub fn scene(&self) -> &SceneRef {
        &self.scene
    }

    /// Name of the wrapped scene.
    pub fn scene_name(&self) -> String {
        self.scene.borrow().name().to_string()
    }

    /// True if both nodes wrap the same scene instance.
    pub fn is_same_scene(&self, scene: &SceneRef) -> bool {
        Rc::ptr_eq(&self.scene, scene)
    }
}

impl fmt::Debug for SceneNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.scene.try_borrow() {
            Ok(scene) => f.debug_tuple("SceneNode").field(&scene.name()).finish(),
            Err(_) => f.write_str("SceneNode(<borrowed>)"),
        }
    }
}

//=== SceneHistory ========================================================

/// Stack of scene nodes, active node on top.
#[derive(Debug, Default)]
pub struct SceneHistory {
    nodes: Vec<SceneNode>,
    limit: Option<usize>,
}

impl SceneHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History keeping at most `limit` nodes (minimum 1).
    pub fn with_limit(limit: usize) -> Self {
        Self {
            nodes: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    pub fn set_limit(&mut self, limit: Option<usize>) {
        self.limit = limit.map(|limit| limit.max(1));
        self.enforce_limit();
    }

    pub fn push(&mut self, node: SceneNode) {
        self.nodes.push(node);
        self.enforce_limit();
    }

    pub fn pop(&mut self) -> Option<SceneNode> {
        self.nodes.pop()
    }

    pub fn active(&self) -> Option<&SceneNode> {
        self.nodes.last()
    }

    pub fn previous(&self) -> Option<&SceneNode> {
        self.nodes.len().checked_sub(2).map(|i| &self.nodes[i])
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn clear(&mut self) {
        self.nodes.clear();
    }

    /// Nodes from oldest to active.
    pub fn iter(&self) -> impl Iterator<Item = &SceneNode> {
        self.nodes.iter()
    }

    fn enforce_limit(&mut self) {
        let Some(limit) = self.limit else {
            return;
        };
        if self.nodes.len() > limit {
            let excess = self.nodes.len() - limit;
            debug!("Scene history full, dropping {} oldest node(s)", excess);
            self.nodes.drain(..excess);
        }
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::{scene_ref, BasicScene};

    fn node(name: &str) -> SceneNode {
        SceneNode::new(scene_ref(BasicScene::new(name)))
    }

    #[test]
    fn active_and_previous_follow_the_stack() {
        let mut history = SceneHistory::new();
        assert!(history.active().is_none());
        assert!(history.previous().is_none());

        history.push(node("A"));
        history.push(node("B"));

        assert_eq!(history.active().unwrap().scene_name(), "B");
        assert_eq!(history.previous().unwrap().scene_name(), "A");

        history.pop();
        assert_eq!(history.active().unwrap().scene_name(), "A");
        assert!(history.previous().is_none());
    }

    #[test]
    fn limit_drops_oldest_nodes() {
        let mut history = SceneHistory::with_limit(2);
        history.push(node("A"));
        history.push(node("B"));
        history.push(node("C"));

        let names: Vec<_> = history.iter().map(SceneNode::scene_name).collect();
        assert_eq!(names, ["B", "C"]);

        history.set_limit(Some(1));
        assert_eq!(history.len(), 1);
        assert_eq!(history.active().unwrap().scene_name(), "C");
    }

    #[test]
    fn node_identity_is_by_instance() {
        let scene = scene_ref(BasicScene::new("A"));
        let first = SceneNode::new(scene.clone());

        assert!(first.is_same_scene(&scene));
        assert!(!first.is_same_scene(&scene_ref(BasicScene::new("A"))));
    }
}
