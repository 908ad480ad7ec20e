//=========================================================================
// Physics Contract
//=========================================================================
//
// The scene core only needs a physics subsystem it can reset, hand
// colliders to, and tick. Collision resolution lives behind this trait.
//
//=========================================================================

//=== External Dependencies ===============================================

use log::debug;

//=== Internal Dependencies ===============================================

use crate::core::math::{Rect, Vector2};

//=== Collider ============================================================

/// Axis-aligned collider snapshot registered with physics on scene load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Collider {
    /// Name of the game object owning the collider.
    pub owner: String,
    /// Offset from the owner's position.
    pub offset: Vector2,
    pub size: Vector2,
    pub is_trigger: bool,
}

impl Collider {
    /// World-space bounds given the owner's position.
    pub fn bounds(&self, owner_position: Vector2) -> Rect {
        Rect::new(owner_position + self.offset, self.size)
    }
}

//=== Physics Trait =======================================================

/// Physics subsystem contract consumed by the scene manager.
pub trait Physics {
    /// Resets the simulation, dropping every registered collider.
    fn init(&mut self);

    /// Registers a collider for the active scene.
    fn add_collider(&mut self, collider: Collider);

    /// Advances the simulation by one tick.
    fn update(&mut self);

    /// Returns the registered colliders.
    fn colliders(&self) -> &[Collider];
}

//=== ColliderRegistry ====================================================

/// Default physics backend: records colliders and counts ticks.
#[derive(Debug, Default)]
pub struct ColliderRegistry {
    colliders: Vec<Collider>,
    ticks: u64,
}

impl ColliderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `update` calls since the last `init`.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Physics for ColliderRegistry {
    fn init(&mut self) {
        debug!("Physics reset ({} collider(s) dropped)", self.colliders.len());
        self.colliders.clear();
        self.ticks = 0;
    }

    fn add_collider(&mut self, collider: Collider) {
        debug!("Registering collider for {}", collider.owner);
        self.colliders.push(collider);
    }

    fn update(&mut self) {
        self.ticks += 1;
    }

    fn colliders(&self) -> &[Collider] {
        &self.colliders
    }
}

//=========================================================================
// Tests
//=========================================================================
