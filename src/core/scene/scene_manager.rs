//=========================================================================
// Scene Manager
//=========================================================================
//
// Manages scene registration, activation, history, and per-tick
// delegation to the active scene.
//
// Scenes are kept in an insertion-ordered registry and looked up by index
// or by name (first match wins). Activation pushes a SceneNode onto the
// history; the node below it is the previous scene.
//
// Activation sequence (strict):
//   LoadStart → resolve → stop → unload → push node (settings copied)
//             → load (physics init, awake once, colliders, LoadEnd)
//             → start
//
//=========================================================================

//=== External Dependencies ===============================================

use std::cell::RefCell;
use std::ffi::OsString;
use std::fmt;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use log::{debug, info, warn};
use serde_json::Value;

//=== Internal Dependencies ===============================================

use super::{scene_ref, MetadataScene, ObjectRegistry, SceneHistory, SceneNode, SceneRef};
use crate::core::config::DEFAULT_SCENE_FILE_EXTENSION;
use crate::core::error::{SceneError, SceneId};
use crate::core::events::{EventManager, SceneEvent, SceneEventType};
use crate::core::game_object::GameObject;
use crate::core::metadata::{SceneMetadata, SceneObjectMetadata};
use crate::core::physics::Physics;
use crate::core::settings::Settings;

//=== Scene Manager =======================================================

/// Owns the scene registry and the active scene history.
///
/// One manager exists per running game. It is shared with game states
/// through the state context rather than through a global.
pub struct SceneManager {
    scenes: Vec<SceneRef>,
    history: SceneHistory,
    settings: Settings,
    registry: ObjectRegistry,
    scene_file_extension: String,
    event_manager: Rc<RefCell<EventManager>>,
    physics: Box<dyn Physics>,
}

impl SceneManager {
    //--- Construction -----------------------------------------------------

    /// Creates a manager with an empty registry and no active scene.
    pub fn new(event_manager: Rc<RefCell<EventManager>>, physics: Box<dyn Physics>) -> Self {
        Self {
            scenes: Vec::new(),
            history: SceneHistory::new(),
            settings: Settings::new(),
            registry: ObjectRegistry::new(),
            scene_file_extension: DEFAULT_SCENE_FILE_EXTENSION.to_string(),
            event_manager,
            physics,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene. The same scene may be registered more than once.
    pub fn add_scene(&mut self, scene: SceneRef) -> &mut Self {
        debug!("Adding scene {}", scene.borrow().name());
        self.scenes.push(scene);
        self
    }

    /// Removes every registration of this scene instance.
    pub fn remove_scene(&mut self, scene: &SceneRef) -> &mut Self {
        let before = self.scenes.len();
        self.scenes.retain(|s| !Rc::ptr_eq(s, scene));

        if before == self.scenes.len() {
            warn!("Attempted to remove a scene that is not registered");
        }
        self
    }

    pub fn scenes(&self) -> &[SceneRef] {
        &self.scenes
    }

    pub fn registry(&self) -> &ObjectRegistry {
        &self.registry
    }

    /// Factories used by scenes loaded from files after this call.
    pub fn registry_mut(&mut self) -> &mut ObjectRegistry {
        &mut self.registry
    }

    pub fn physics(&self) -> &dyn Physics {
        self.physics.as_ref()
    }

    pub fn event_manager(&self) -> Rc<RefCell<EventManager>> {
        Rc::clone(&self.event_manager)
    }

    //--- Active Scene -----------------------------------------------------

    /// Active scene, `None` until the first successful load.
    pub fn active_scene(&self) -> Option<SceneRef> {
        self.history.active().map(|node| Rc::clone(node.scene()))
    }

    pub fn active_scene_node(&self) -> Option<&SceneNode> {
        self.history.active()
    }

    pub fn previous_scene_node(&self) -> Option<&SceneNode> {
        self.history.previous()
    }

    pub fn history(&self) -> &SceneHistory {
        &self.history
    }

    pub fn set_history_limit(&mut self, limit: Option<usize>) {
        self.history.set_limit(limit);
    }

    //--- Scene Loading ----------------------------------------------------

    /// Activates the scene at a registry index or with the given name.
    ///
    /// An unmatched identifier returns [`SceneError::NotFound`] and leaves
    /// the active scene untouched.
    pub fn load_scene(&mut self, id: impl Into<SceneId>) -> Result<(), SceneError> {
        let id = id.into();
        info!("Loading scene: {}", id);
        self.dispatch(SceneEvent::new(SceneEventType::LoadStart));

        let scene = self.find_scene(&id).ok_or(SceneError::NotFound(id))?;
        self.activate(scene)
    }

    /// Re-activates the scene below the active one in the history.
    ///
    /// The active node is popped, so going back repeatedly walks down the
    /// history. Does nothing when there is no previous scene.
    pub fn load_previous_scene(&mut self) -> Result<(), SceneError> {
        info!("Loading previous scene");

        let Some(previous) = self.history.previous().map(SceneNode::scene_name) else {
            debug!("No previous scene to load");
            return Ok(());
        };
        self.dispatch(SceneEvent::new(SceneEventType::LoadStart));

        let id = SceneId::Name(previous);
        let scene = self.find_scene(&id).ok_or(SceneError::NotFound(id))?;

        self.stop();
        self.unload();
        self.history.pop();
        self.history.pop();
        self.push_node(scene);
        self.load()?;
        self.start();
        Ok(())
    }

    /// Initializes physics and loads the active scene.
    ///
    /// The scene is awakened on its first activation, then every collider
    /// of its root game objects is registered with physics.
    pub fn load(&mut self) -> Result<(), SceneError> {
        let Some(scene) = self.active_scene() else {
            warn!("No active scene to load");
            return Ok(());
        };

        self.physics.init();

        {
            let mut scene = scene.borrow_mut();
            if !scene.base().is_awake() {
                debug!("Awakening scene {}", scene.name());
                scene.base_mut().mark_awake();
                scene.awake()?;
            }
        }

        for collider in scene
            .borrow()
            .root_game_objects()
            .iter()
            .filter_map(GameObject::collider)
        {
            self.physics.add_collider(collider);
        }

        scene.borrow_mut().load();
        self.dispatch(SceneEvent::new(SceneEventType::LoadEnd));
        Ok(())
    }

    /// Reads `<path><extension>`, registers the scene it describes and
    /// returns it. The scene content is built when it is first activated.
    ///
    /// The scene is named after the document's `name` field, or after the
    /// file name of `path` when absent.
    pub fn load_scene_from_file(&mut self, path: impl AsRef<Path>) -> Result<SceneRef, SceneError> {
        let path = path.as_ref();
        let filename = self.scene_file_path(path);
        info!("Loading scene file {}", filename.display());

        let text = fs::read_to_string(&filename).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                SceneError::NotFound(SceneId::Name(path.display().to_string()))
            } else {
                SceneError::Io {
                    path: filename.clone(),
                    source,
                }
            }
        })?;

        let document: Value = serde_json::from_str(&text).map_err(|source| SceneError::Parse {
            path: filename.clone(),
            source,
        })?;
        let metadata = SceneMetadata::from_value(&document)?;
        self.validate_tags(&metadata)?;

        let name = metadata.name.clone().unwrap_or_else(|| {
            path.file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_default()
        });

        let mut scene = MetadataScene::new(name, metadata, self.registry.clone());
        if let Some(root) = filename.parent() {
            scene = scene.with_asset_root(root);
        }

        let scene = scene_ref(scene);
        self.add_scene(Rc::clone(&scene));
        Ok(scene)
    }

    pub fn scene_file_extension(&self) -> &str {
        &self.scene_file_extension
    }

    pub fn set_scene_file_extension(&mut self, extension: impl Into<String>) {
        self.scene_file_extension = extension.into();
    }

    //--- Delegation -------------------------------------------------------

    pub fn unload(&mut self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow_mut().unload();
        }
    }

    pub fn start(&mut self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow_mut().start();
        }
    }

    pub fn stop(&mut self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow_mut().stop();
        }
    }

    pub fn render(&self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow().render();
        }
    }

    pub fn render_at(&self, x: Option<i32>, y: Option<i32>) {
        if let Some(node) = self.history.active() {
            node.scene().borrow().render_at(x, y);
        }
    }

    pub fn erase(&self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow().erase();
        }
    }

    pub fn erase_at(&self, x: Option<i32>, y: Option<i32>) {
        if let Some(node) = self.history.active() {
            node.scene().borrow().erase_at(x, y);
        }
    }

    pub fn resume(&mut self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow_mut().resume();
        }
    }

    pub fn suspend(&mut self) {
        if let Some(node) = self.history.active() {
            node.scene().borrow_mut().suspend();
        }
    }

    //--- Update Loop ------------------------------------------------------

    /// Ticks physics and the active scene's physics hook.
    pub fn update_physics(&mut self) {
        let Some(scene) = self.active_scene() else {
            return;
        };

        self.physics.update();
        let name = {
            let mut scene = scene.borrow_mut();
            scene.update_physics();
            scene.name().to_string()
        };
        self.dispatch(SceneEvent::with_scene(SceneEventType::UpdatePhysics, name));
    }

    /// Physics update first, then the scene update.
    pub fn update(&mut self) {
        self.update_physics();

        let Some(scene) = self.active_scene() else {
            return;
        };

        let name = {
            let mut scene = scene.borrow_mut();
            scene.update();
            scene.name().to_string()
        };
        self.dispatch(SceneEvent::with_scene(SceneEventType::Update, name));
    }

    //--- Settings ---------------------------------------------------------

    /// Replaces the settings wholesale. An empty mapping is ignored.
    pub fn load_settings(&mut self, settings: Settings) {
        if settings.is_empty() {
            debug!("Ignoring empty settings");
            return;
        }
        self.settings = settings;
    }

    pub fn get_settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get_setting(&self, key: &str) -> Option<&Value> {
        self.settings.get(key)
    }

    //--- Internal Helpers -------------------------------------------------

    fn find_scene(&self, id: &SceneId) -> Option<SceneRef> {
        match id {
            SceneId::Index(index) => self.scenes.get(*index).cloned(),
            SceneId::Name(name) => self
                .scenes
                .iter()
                .find(|scene| scene.borrow().name() == name)
                .cloned(),
        }
    }

    fn activate(&mut self, scene: SceneRef) -> Result<(), SceneError> {
        self.stop();
        self.unload();
        self.push_node(scene);
        self.load()?;
        self.start();
        Ok(())
    }

    fn push_node(&mut self, scene: SceneRef) {
        scene.borrow_mut().load_scene_settings(self.settings.clone());
        self.history.push(SceneNode::new(scene));
    }

    fn dispatch(&self, event: SceneEvent) {
        self.event_manager.borrow_mut().dispatch(event);
    }

    fn scene_file_path(&self, path: &Path) -> PathBuf {
        let mut filename = OsString::from(path.as_os_str());
        filename.push(&self.scene_file_extension);
        PathBuf::from(filename)
    }

    /// Rejects documents naming widget types or component classes that
    /// the registry cannot build.
    fn validate_tags(&self, metadata: &SceneMetadata) -> Result<(), SceneError> {
        for item in &metadata.hierarchy {
            match item {
                SceneObjectMetadata::UiElement(meta) if !self.registry.is_ui_type(&meta.kind) => {
                    return Err(SceneError::UnsupportedItemType(meta.kind.clone()));
                }
                SceneObjectMetadata::GameObject(meta) => {
                    if let Some(component) = meta
                        .components
                        .iter()
                        .find(|c| !self.registry.has_component(&c.class))
                    {
                        return Err(SceneError::UnknownComponent(component.class.clone()));
                    }
                }
                SceneObjectMetadata::UiElement(_) => {}
            }
        }
        Ok(())
    }
}

impl fmt::Debug for SceneManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SceneManager")
            .field("scenes", &self.scenes.len())
            .field("history", &self.history)
            .field("settings", &self.settings)
            .field("scene_file_extension", &self.scene_file_extension)
            .finish()
    }
}

//=========================================================================
// Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::game_object::BoxCollider;
    use crate::core::math::Vector2;
    use crate::core::physics::{Collider, ColliderRegistry};
    use crate::core::scene::{BasicScene, Scene, SceneBase};

    type Journal = Rc<RefCell<Vec<String>>>;

    //--- Test Doubles -----------------------------------------------------

    struct RecordingScene {
        base: SceneBase,
        journal: Journal,
        fail_awake: bool,
    }

    impl RecordingScene {
        fn new(name: &str, journal: &Journal) -> Self {
            Self {
                base: SceneBase::new(name),
                journal: Rc::clone(journal),
                fail_awake: false,
            }
        }

        fn record(&self, hook: &str) {
            self.journal
                .borrow_mut()
                .push(format!("{}:{}", self.base.name(), hook));
        }
    }

    impl Scene for RecordingScene {
        fn base(&self) -> &SceneBase {
            &self.base
        }

        fn base_mut(&mut self) -> &mut SceneBase {
            &mut self.base
        }

        fn awake(&mut self) -> Result<(), SceneError> {
            self.record("awake");
            if self.fail_awake {
                return Err(SceneError::management("broken scene"));
            }
            Ok(())
        }

        fn load(&mut self) {
            self.record("load");
            self.base.load();
        }

        fn unload(&mut self) {
            self.record("unload");
            self.base.unload();
        }

        fn start(&mut self) {
            self.record("start");
            self.base.start();
        }

        fn stop(&mut self) {
            self.record("stop");
            self.base.stop();
        }

        fn update(&mut self) {
            self.record("update");
        }

        fn update_physics(&mut self) {
            self.record("update_physics");
        }

        fn suspend(&mut self) {
            self.record("suspend");
            self.base.suspend();
        }

        fn resume(&mut self) {
            self.record("resume");
            self.base.resume();
        }
    }

    struct RecordingPhysics {
        journal: Journal,
        colliders: Vec<Collider>,
    }

    impl Physics for RecordingPhysics {
        fn init(&mut self) {
            self.journal.borrow_mut().push("physics:init".to_string());
            self.colliders.clear();
        }

        fn add_collider(&mut self, collider: Collider) {
            self.journal
                .borrow_mut()
                .push(format!("physics:collider:{}", collider.owner));
            self.colliders.push(collider);
        }

        fn update(&mut self) {
            self.journal.borrow_mut().push("physics:update".to_string());
        }

        fn colliders(&self) -> &[Collider] {
            &self.colliders
        }
    }

    //--- Helpers ----------------------------------------------------------

    fn manager() -> SceneManager {
        SceneManager::new(
            Rc::new(RefCell::new(EventManager::new())),
            Box::new(ColliderRegistry::new()),
        )
    }

    fn recording_manager(journal: &Journal) -> SceneManager {
        SceneManager::new(
            Rc::new(RefCell::new(EventManager::new())),
            Box::new(RecordingPhysics {
                journal: Rc::clone(journal),
                colliders: Vec::new(),
            }),
        )
    }

    fn add_basic(manager: &mut SceneManager, name: &str) -> SceneRef {
        let scene = scene_ref(BasicScene::new(name));
        manager.add_scene(Rc::clone(&scene));
        scene
    }

    fn active_name(manager: &SceneManager) -> Option<String> {
        manager.active_scene().map(|s| s.borrow().name().to_string())
    }

    fn event_kinds(manager: &SceneManager) -> Vec<SceneEventType> {
        let events = manager.event_manager();
        let kinds = events
            .borrow()
            .read::<SceneEvent>()
            .iter()
            .map(|e| e.kind)
            .collect();
        kinds
    }

    //--- Resolution -------------------------------------------------------

    #[test]
    fn no_active_scene_before_first_load() {
        let mut manager = manager();
        add_basic(&mut manager, "Title");

        assert!(manager.active_scene().is_none());
        assert!(manager.active_scene_node().is_none());
        assert!(manager.previous_scene_node().is_none());
    }

    #[test]
    fn load_scene_by_index_and_by_first_matching_name() {
        let mut manager = manager();
        let first = add_basic(&mut manager, "Level");
        let _title = add_basic(&mut manager, "Title");
        let _shadow = add_basic(&mut manager, "Level");

        manager.load_scene(1).unwrap();
        assert_eq!(active_name(&manager).as_deref(), Some("Title"));

        manager.load_scene("Level").unwrap();
        assert!(Rc::ptr_eq(&manager.active_scene().unwrap(), &first));
    }

    #[test]
    fn unmatched_identifier_leaves_active_scene_unchanged() {
        let mut manager = manager();
        add_basic(&mut manager, "Title");
        manager.load_scene("Title").unwrap();

        let err = manager.load_scene("Missing").unwrap_err();
        assert!(matches!(err, SceneError::NotFound(SceneId::Name(ref name)) if name == "Missing"));

        let err = manager.load_scene(5).unwrap_err();
        assert!(matches!(err, SceneError::NotFound(SceneId::Index(5))));

        assert_eq!(active_name(&manager).as_deref(), Some("Title"));
        assert_eq!(manager.history().len(), 1);
        assert!(manager.active_scene().unwrap().borrow().base().is_started());
    }

    //--- Lifecycle --------------------------------------------------------

    #[test]
    fn activation_runs_in_strict_order() {
        let journal = Journal::default();
        let mut manager = recording_manager(&journal);
        manager.add_scene(scene_ref(RecordingScene::new("A", &journal)));
        manager.add_scene(scene_ref(RecordingScene::new("B", &journal)));

        manager.load_scene("A").unwrap();
        manager.load_scene("B").unwrap();

        assert_eq!(
            *journal.borrow(),
            [
                "physics:init",
                "A:awake",
                "A:load",
                "A:start",
                "A:stop",
                "A:unload",
                "physics:init",
                "B:awake",
                "B:load",
                "B:start",
            ]
        );
    }

    #[test]
    fn awake_runs_only_on_first_activation() {
        let journal = Journal::default();
        let mut manager = recording_manager(&journal);
        manager.add_scene(scene_ref(RecordingScene::new("A", &journal)));
        manager.add_scene(scene_ref(RecordingScene::new("B", &journal)));

        manager.load_scene("A").unwrap();
        manager.load_scene("B").unwrap();
        manager.load_scene("A").unwrap();

        let awakes = journal.borrow().iter().filter(|e| *e == "A:awake").count();
        assert_eq!(awakes, 1);
    }

    #[test]
    fn awake_failure_propagates_without_start() {
        let journal = Journal::default();
        let mut manager = recording_manager(&journal);
        let mut broken = RecordingScene::new("Broken", &journal);
        broken.fail_awake = true;
        manager.add_scene(scene_ref(broken));

        let err = manager.load_scene("Broken").unwrap_err();
        assert!(matches!(err, SceneError::Management(_)));
        assert!(!journal.borrow().contains(&"Broken:start".to_string()));
    }

    #[test]
    fn colliders_are_registered_on_load() {
        let mut player = GameObject::named("Player");
        player
            .add_component(Box::new(BoxCollider::new(Vector2::new(2, 1))))
            .unwrap();

        let mut manager = manager();
        manager.add_scene(scene_ref(
            BasicScene::new("Level")
                .with(player)
                .with(GameObject::named("Decoration")),
        ));
        manager.load_scene("Level").unwrap();

        let colliders = manager.physics().colliders();
        assert_eq!(colliders.len(), 1);
        assert_eq!(colliders[0].owner, "Player");
        assert_eq!(colliders[0].size, Vector2::new(2, 1));
    }

    #[test]
    fn delegations_are_no_ops_without_active_scene() {
        let mut manager = manager();
        manager.start();
        manager.stop();
        manager.update();
        manager.render();
        manager.render_at(Some(1), None);
        manager.erase();
        manager.erase_at(None, Some(2));
        manager.suspend();
        manager.resume();
        manager.unload();
        manager.load().unwrap();

        assert!(event_kinds(&manager).is_empty());
    }

    #[test]
    fn suspend_and_resume_reach_active_scene() {
        let journal = Journal::default();
        let mut manager = recording_manager(&journal);
        manager.add_scene(scene_ref(RecordingScene::new("A", &journal)));
        manager.load_scene(0).unwrap();

        manager.suspend();
        manager.resume();

        let tail: Vec<_> = journal.borrow().iter().rev().take(2).cloned().collect();
        assert_eq!(tail, ["A:resume", "A:suspend"]);
    }

    //--- History ----------------------------------------------------------

    #[test]
    fn previous_scene_navigation_is_a_stack() {
        let mut manager = manager();
        for name in ["A", "B", "C"] {
            add_basic(&mut manager, name);
        }

        manager.load_scene("A").unwrap();
        manager.load_scene("B").unwrap();
        assert_eq!(manager.previous_scene_node().unwrap().scene_name(), "A");

        manager.load_scene("C").unwrap();
        manager.load_previous_scene().unwrap();
        assert_eq!(active_name(&manager).as_deref(), Some("B"));
        assert_eq!(manager.previous_scene_node().unwrap().scene_name(), "A");

        manager.load_previous_scene().unwrap();
        assert_eq!(active_name(&manager).as_deref(), Some("A"));
        assert!(manager.previous_scene_node().is_none());

        manager.load_previous_scene().unwrap();
        assert_eq!(active_name(&manager).as_deref(), Some("A"));
        assert_eq!(manager.history().len(), 1);
    }

    #[test]
    fn previous_scene_removed_from_registry_is_not_found() {
        let mut manager = manager();
        let a = add_basic(&mut manager, "A");
        add_basic(&mut manager, "B");

        manager.load_scene("A").unwrap();
        manager.load_scene("B").unwrap();
        manager.remove_scene(&a);

        assert!(manager.load_previous_scene().unwrap_err().is_not_found());
        assert_eq!(active_name(&manager).as_deref(), Some("B"));
    }

    #[test]
    fn history_limit_bounds_navigation() {
        let mut manager = manager();
        manager.set_history_limit(Some(2));
        for name in ["A", "B", "C"] {
            add_basic(&mut manager, name);
            manager.load_scene(name).unwrap();
        }

        assert_eq!(manager.history().len(), 2);
        manager.load_previous_scene().unwrap();
        assert_eq!(active_name(&manager).as_deref(), Some("B"));
        assert!(manager.previous_scene_node().is_none());
    }

    #[test]
    fn remove_scene_uses_identity() {
        let mut manager = manager();
        let a = add_basic(&mut manager, "A");
        manager.add_scene(Rc::clone(&a));
        let twin = add_basic(&mut manager, "A");

        manager.remove_scene(&a);

        assert_eq!(manager.scenes().len(), 1);
        assert!(Rc::ptr_eq(&manager.scenes()[0], &twin));
    }

    //--- Events -----------------------------------------------------------

    #[test]
    fn load_publishes_start_then_end() {
        let mut manager = manager();
        add_basic(&mut manager, "A");
        manager.load_scene("A").unwrap();

        assert_eq!(
            event_kinds(&manager),
            [SceneEventType::LoadStart, SceneEventType::LoadEnd]
        );
    }

    #[test]
    fn physics_update_precedes_scene_update() {
        let journal = Journal::default();
        let mut manager = recording_manager(&journal);
        manager.add_scene(scene_ref(RecordingScene::new("A", &journal)));
        manager.load_scene("A").unwrap();
        manager.event_manager().borrow_mut().clear_all();
        journal.borrow_mut().clear();

        manager.update();

        assert_eq!(
            *journal.borrow(),
            ["physics:update", "A:update_physics", "A:update"]
        );
        let events = manager.event_manager().borrow().read::<SceneEvent>().to_vec();
        assert_eq!(
            events,
            [
                SceneEvent::with_scene(SceneEventType::UpdatePhysics, "A"),
                SceneEvent::with_scene(SceneEventType::Update, "A"),
            ]
        );
    }

    #[test]
    fn listeners_observe_events_synchronously() {
        let mut manager = manager();
        add_basic(&mut manager, "A");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        manager
            .event_manager()
            .borrow_mut()
            .subscribe(move |event: &SceneEvent| sink.borrow_mut().push(event.kind));

        manager.load_scene("A").unwrap();
        manager.update();

        assert_eq!(
            *seen.borrow(),
            [
                SceneEventType::LoadStart,
                SceneEventType::LoadEnd,
                SceneEventType::UpdatePhysics,
                SceneEventType::Update,
            ]
        );
    }

    //--- Settings ---------------------------------------------------------

    #[test]
    fn settings_are_held_by_value() {
        let mut manager = manager();
        let mut settings = Settings::new();
        settings.insert("game_name", "Blasters");

        manager.load_settings(settings.clone());
        settings.insert("game_name", "Changed");

        assert_eq!(manager.get_settings().get_str("game_name"), Some("Blasters"));
        assert_eq!(manager.get_setting("game_name"), Some(&Value::from("Blasters")));
        assert_eq!(manager.get_setting("missing"), None);
    }

    #[test]
    fn empty_settings_are_ignored() {
        let mut manager = manager();
        let mut settings = Settings::new();
        settings.insert("fps", 30);
        manager.load_settings(settings.clone());

        manager.load_settings(Settings::new());
        assert_eq!(manager.get_settings(), &settings);
    }

    #[test]
    fn scenes_receive_a_snapshot_of_settings_on_load() {
        let mut manager = manager();
        let scene = add_basic(&mut manager, "A");
        let mut settings = Settings::new();
        settings.insert("fps", 30);
        manager.load_settings(settings);

        manager.load_scene("A").unwrap();

        let mut later = Settings::new();
        later.insert("fps", 60);
        manager.load_settings(later);

        assert_eq!(scene.borrow().base().setting("fps"), Some(&Value::from(30)));
    }
}
