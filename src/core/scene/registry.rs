//=========================================================================
// Scene Registry
//=========================================================================
//
// Manages scene registration, activation and disposal.
//
// Scenes are stored in a HashMap by key as shared slots. The active scene
// holds its own handle to its slot, so it keeps running after its key is
// unregistered. A slot is constructed on first render or update of its
// scene, so registering a scene costs nothing until it is shown.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::rc::Rc;

use log::{debug, warn};

//=== Internal Dependencies ===============================================

use super::{EmptyScene, LazyScene, Scene, SceneContext, SharedScene, TransitionQueue};
use crate::core::graphics::{Renderer, TextureLoader};
use crate::core::input::Keyboard;

//=== Scene Key Trait =====================================================

/// Marker trait for scene identifiers.
///
/// Scene keys uniquely identify scenes in the registry's HashMap.
/// Typically implemented by game-specific enums.
pub trait SceneKey: Clone + Copy + Eq + Hash + Debug + 'static {}

//=== SceneError ==========================================================

/// Misuse of the registry API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneError<K: SceneKey> {
    /// A scene is already registered under the key.
    DuplicateKey(K),

    /// No scene is registered under the key.
    UnknownKey(K),
}

impl<K: SceneKey> std::fmt::Display for SceneError<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateKey(key) => write!(
                f,
                "Scene {:?} is already registered; unregister it before registering again",
                key
            ),
            Self::UnknownKey(key) => write!(f, "Scene {:?} is not registered", key),
        }
    }
}

impl<K: SceneKey> std::error::Error for SceneError<K> {}

//=== SceneRegistry =======================================================

/// The active scene: its key and a handle to its slot.
///
/// The handle keeps the slot alive after its key is unregistered.
struct ActiveScene<K: SceneKey> {
    key: K,
    slot: SharedScene<K>,
}

/// Owns every registered scene and tracks the active one.
///
/// While no scene is active, rendering and updating go to an
/// [`EmptyScene`] placeholder.
pub struct SceneRegistry<K: SceneKey> {
    scenes: HashMap<K, SharedScene<K>>,
    active: Option<ActiveScene<K>>,
}

impl<K: SceneKey> SceneRegistry<K> {
    //--- Construction -----------------------------------------------------

    pub fn new() -> Self {
        Self {
            scenes: HashMap::new(),
            active: None,
        }
    }

    //--- Registration -----------------------------------------------------

    /// Registers a scene built by `factory` on first use.
    ///
    /// The factory is not called here. Registering an existing key fails
    /// and leaves the existing scene in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use prism_engine::prelude::*;
    /// # #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// # enum GameScene { Main }
    /// # impl SceneKey for GameScene {}
    /// let mut registry = SceneRegistry::new();
    /// registry.register(GameScene::Main, |_: &TextureLoader| EmptyScene).unwrap();
    ///
    /// assert!(registry.register(GameScene::Main, |_: &TextureLoader| EmptyScene).is_err());
    /// ```
    pub fn register<F, T>(&mut self, key: K, factory: F) -> Result<(), SceneError<K>>
    where
        F: FnOnce(&TextureLoader) -> T + 'static,
        T: Scene<K> + 'static,
    {
        self.register_slot(key, LazyScene::new(factory).into_shared())
    }

    /// Registers an existing slot, e.g. one returned by [`unregister`].
    ///
    /// [`unregister`]: Self::unregister
    pub fn register_slot(&mut self, key: K, slot: SharedScene<K>) -> Result<(), SceneError<K>> {
        if self.scenes.contains_key(&key) {
            return Err(SceneError::DuplicateKey(key));
        }

        debug!(target: "scene", "Registered scene {:?}", key);
        self.scenes.insert(key, slot);
        Ok(())
    }

    /// Makes `key` the active scene. Does not construct it.
    ///
    /// On failure the active scene is unchanged.
    pub fn activate(&mut self, key: K) -> Result<(), SceneError<K>> {
        let slot = self.scenes.get(&key).ok_or(SceneError::UnknownKey(key))?;

        debug!(target: "scene", "Activated scene {:?}", key);
        self.active = Some(ActiveScene {
            key,
            slot: Rc::clone(slot),
        });
        Ok(())
    }

    /// Removes the slot without disposing it, whatever its state.
    ///
    /// The caller takes over cleanup. If `key` is active it stays active,
    /// detached from the registry, until another scene is activated.
    pub fn unregister(&mut self, key: K) -> Result<SharedScene<K>, SceneError<K>> {
        let slot = self.scenes.remove(&key).ok_or(SceneError::UnknownKey(key))?;

        if self.active_key() == Some(key) {
            debug!(target: "scene", "Unregistered the active scene {:?}, it keeps running", key);
        } else {
            debug!(target: "scene", "Unregistered scene {:?}", key);
        }
        Ok(slot)
    }

    /// Removes the slot and disposes it if it was constructed.
    ///
    /// Returns whether dispose ran. An unconstructed scene is dropped
    /// without ever being built. Disposing the active scene makes the
    /// placeholder active.
    pub fn unregister_and_dispose(&mut self, key: K) -> Result<bool, SceneError<K>> {
        let slot = self.unregister(key)?;
        let disposed = slot.borrow_mut().dispose_if_initialized();

        if disposed && self.active_key() == Some(key) {
            warn!(target: "scene", "Disposed the active scene {:?}, falling back to an empty scene", key);
            self.active = None;
        }
        Ok(disposed)
    }

    //--- Queries ----------------------------------------------------------

    pub fn contains(&self, key: K) -> bool {
        self.scenes.contains_key(&key)
    }

    /// The active key, or `None` while the placeholder is active.
    ///
    /// The key may no longer be registered; see [`unregister`].
    ///
    /// [`unregister`]: Self::unregister
    pub fn active_key(&self) -> Option<K> {
        self.active.as_ref().map(|active| active.key)
    }

    pub fn len(&self) -> usize {
        self.scenes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenes.is_empty()
    }

    /// Whether the scene under `key` has been constructed. `false` for
    /// unknown keys.
    pub fn is_initialized(&self, key: K) -> bool {
        self.scenes
            .get(&key)
            .is_some_and(|slot| slot.borrow().is_initialized())
    }

    //--- Frame Operations -------------------------------------------------

    /// Renders the active scene, constructing it on first use.
    pub fn render_active(&mut self, renderer: &mut dyn Renderer, textures: &TextureLoader) {
        match &self.active {
            Some(active) => active.slot.borrow_mut().get_or_init(textures).render(renderer),
            None => Scene::<K>::render(&mut EmptyScene, renderer),
        }
    }

    /// Updates the active scene, constructing it on first use.
    ///
    /// Transition requests issued by the scene are pushed to `transitions`.
    pub fn update_active(
        &mut self,
        keyboard: &Keyboard,
        textures: &TextureLoader,
        transitions: &mut TransitionQueue<K>,
    ) {
        let mut context = SceneContext::new(keyboard, textures, transitions);

        match &self.active {
            Some(active) => active.slot.borrow_mut().get_or_init(textures).update(&mut context),
            None => Scene::<K>::update(&mut EmptyScene, &mut context),
        }
    }

    //--- Teardown ---------------------------------------------------------

    /// Disposes every constructed scene, clears the registry and resets the
    /// active scene to the placeholder.
    ///
    /// A detached active scene is disposed too. Unconstructed scenes are
    /// dropped without being built. Returns the number of scenes disposed.
    pub fn dispose_all(&mut self) -> usize {
        let mut disposed = 0;

        for (key, slot) in self.scenes.drain() {
            if slot.borrow_mut().dispose_if_initialized() {
                debug!(target: "scene", "Disposed scene {:?}", key);
                disposed += 1;
            }
        }

        if let Some(active) = self.active.take() {
            if active.slot.borrow_mut().dispose_if_initialized() {
                debug!(target: "scene", "Disposed detached scene {:?}", active.key);
                disposed += 1;
            }
        }

        disposed
    }
}

impl<K: SceneKey> Default for SceneRegistry<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: SceneKey> Debug for SceneRegistry<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SceneRegistry")
            .field("scenes", &self.scenes)
            .field("active", &self.active_key())
            .finish()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
