use std::f32::consts::PI;

use cadence::prelude::*;

const FRAME_DT: f32 = 1.0 / 30.0;
const FRAMES: usize = 150;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    // 1. Scene: a pedestal with a platter on top
    let mut scene = Scene::new();
    let pedestal = scene.create_node_with_name("pedestal");
    let platter = scene.create_node_with_name("platter");
    scene.attach(platter, pedestal);

    // 2. Tracks from flat sampler buffers
    let spin: Vec<f32> = [0.0, PI * 0.5, PI, PI * 1.5, PI * 2.0]
        .iter()
        .flat_map(|&angle| Quat::from_rotation_y(angle).to_array())
        .collect();
    let spin_track = TrackData::from_raw(
        TargetPath::Rotation,
        vec![0.0, 1.0, 2.0, 3.0, 4.0],
        &spin,
        "LINEAR".parse()?,
    )?;

    // Cubic spline layout per keyframe: in-tangent, value, out-tangent
    #[rustfmt::skip]
    let bounce = [
        0.0, 0.0, 0.0,   0.0, 0.0, 0.0,   0.0, 2.0, 0.0,
        0.0, 0.0, 0.0,   0.0, 0.5, 0.0,   0.0, 0.0, 0.0,
        0.0, -2.0, 0.0,  0.0, 0.0, 0.0,   0.0, 0.0, 0.0,
    ];
    let bounce_track = TrackData::from_raw(
        TargetPath::Translation,
        vec![0.0, 2.0, 4.0],
        &bounce,
        "CUBICSPLINE".parse()?,
    )?;

    // 3. Bind by name
    let channels = Binder::bind(
        &scene,
        &[
            ChannelTarget {
                node_name: "platter".to_string(),
                target: TargetPath::Rotation,
                track_index: 0,
            },
            ChannelTarget {
                node_name: "pedestal".to_string(),
                target: TargetPath::Translation,
                track_index: 1,
            },
        ],
    )?;

    let clip = AnimationClip::new("turntable", vec![spin_track, bounce_track], channels, &scene)?;
    log::info!(
        "Clip '{}': {:.2}s, {} channels",
        clip.name(),
        clip.duration(),
        clip.channels().len()
    );
    let key = scene.add_animation(clip);

    // 4. Tick
    for frame in 0..FRAMES {
        let report = AnimationSystem::update(&mut scene, FRAME_DT);
        let rebuilt = scene.update_local_matrices();

        if frame % 15 == 0 {
            let time = scene.animation(key).map_or(0.0, AnimationClip::current_time);
            let height = scene
                .get_node(pedestal)
                .map_or(0.0, |n| n.transform.position.y);
            let (axis, angle) = scene
                .get_node(platter)
                .map_or((Vec3::Y, 0.0), |n| n.transform.rotation.to_axis_angle());

            log::info!(
                "t={time:.3} height={height:.3} spin={:.1}° axis={axis:.2} ({report:?}, {rebuilt} matrices)",
                angle.to_degrees()
            );
        }
    }

    Ok(())
}
