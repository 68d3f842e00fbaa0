use cadence_animation::TickReport;

use crate::scene::Scene;

/// Animation system.
///
/// Drives every clip owned by a [`Scene`].
/// Uses the `std::mem::take` technique to avoid borrow conflicts.
pub struct AnimationSystem;

impl AnimationSystem {
    /// Advances and applies all scene clips, in insertion order.
    ///
    /// # Arguments
    /// * `scene` - Scene reference
    /// * `dt` - Delta time per frame (in seconds)
    pub fn update(scene: &mut Scene, dt: f32) -> TickReport {
        // Temporarily take all clips out so they can write into the scene
        let mut animations = std::mem::take(&mut scene.animations);

        let mut report = TickReport::default();
        for (_key, clip) in &mut animations {
            report += clip.update(dt, scene);
        }

        // Return clips after update
        scene.animations = animations;
        report
    }
}
