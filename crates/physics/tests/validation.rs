use physics::{
    advance, MovingSphere, PhysicsError, ResponsePolicy, Simulation, StaticBox, Vec3, World, WorldBounds,
};

fn sphere_with(radius: f32, velocity: Vec3) -> MovingSphere {
    MovingSphere::new(Vec3::new(0.0, 0.0, -2.0), radius, velocity)
}

#[test]
fn rejects_non_positive_radius() {
    for radius in [0.0, -0.1, f32::NAN, f32::INFINITY] {
        let err = advance(sphere_with(radius, Vec3::ZERO), &World::demo()).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidRadius(_)), "radius {radius}: {err}");
    }
}

#[test]
fn rejects_non_finite_velocity() {
    let sphere = sphere_with(0.1, Vec3::new(f32::NAN, 0.0, 0.0));
    assert_eq!(advance(sphere, &World::demo()), Err(PhysicsError::NonFiniteVelocity));

    let sphere = sphere_with(0.1, Vec3::new(0.0, f32::INFINITY, 0.0));
    assert_eq!(Simulation::new(sphere, World::demo()).unwrap_err(), PhysicsError::NonFiniteVelocity);
}

#[test]
fn rejects_non_finite_position() {
    let sphere = MovingSphere::new(Vec3::new(0.0, f32::NAN, 0.0), 0.1, Vec3::ZERO);
    assert_eq!(advance(sphere, &World::demo()), Err(PhysicsError::NonFinitePosition));
}

#[test]
fn rejects_elasticity_out_of_range() {
    for elasticity in [-0.1, 1.5, f32::NAN] {
        let world = World::demo().with_response(ResponsePolicy::Reflect { elasticity });
        let err = Simulation::new(sphere_with(0.1, Vec3::ZERO), world).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidElasticity(_)));
    }
}

#[test]
fn rejects_empty_bounds() {
    let world = World::new(Vec::new(), WorldBounds::new(3.0, -3.0));
    assert_eq!(
        world.validate(),
        Err(PhysicsError::InvalidBounds { min: 3.0, max: -3.0 })
    );
}

#[test]
fn rejects_flat_box() {
    let world = World::new(
        vec![
            StaticBox::new(Vec3::new(2.0, 0.0, 0.0), 0.5),
            StaticBox::new(Vec3::new(-2.0, 0.0, 0.0), 0.0),
        ],
        WorldBounds::default(),
    );
    assert_eq!(
        world.validate(),
        Err(PhysicsError::InvalidBox { index: 1, half_extent: 0.0 })
    );
}

#[test]
fn error_messages_name_the_value() {
    assert_eq!(
        PhysicsError::InvalidRadius(-1.0).to_string(),
        "sphere radius must be positive and finite, got -1"
    );
}

#[test]
fn reflect_overflow_is_an_error() {
    let world = World::new(
        vec![StaticBox::new(Vec3::new(2.0, 0.0, 0.0), 0.5)],
        WorldBounds::new(-3.4e38, 3.4e38),
    )
    .with_response(ResponsePolicy::Reflect { elasticity: 1.0 });
    let sphere = MovingSphere::new(Vec3::new(1.45, 0.0, 0.0), 0.1, Vec3::new(3e38, 0.0, 0.0));
    assert_eq!(advance(sphere, &world), Err(PhysicsError::NonFiniteVelocity));
}

#[test]
fn position_overflow_is_an_error() {
    let world = World::new(Vec::new(), WorldBounds::new(-3.4e38, 3.4e38));
    let sphere = MovingSphere::new(Vec3::new(3e38, 0.0, 0.0), 0.1, Vec3::new(3e38, 0.0, 0.0));
    assert_eq!(advance(sphere, &world), Err(PhysicsError::NonFinitePosition));

    let mut sim = Simulation::new(sphere, world).unwrap();
    assert!(sim.step().is_err());
    assert_eq!(sim.tick(), 0);
    assert_eq!(*sim.sphere(), sphere);
}
