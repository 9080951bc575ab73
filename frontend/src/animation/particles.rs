//! Point-cloud math behind the hero background. Nothing in here touches the
//! DOM; the hero component owns the canvas and calls into this every frame.

use rand::Rng;

pub const PARTICLE_COUNT: usize = 5000;
/// Side length of the cube the particles are scattered in.
pub const FIELD_EXTENT: f64 = 10.0;
pub const ROTATION_STEP: f64 = 0.0001;
pub const POINTER_GAIN: f64 = 0.00005;
pub const CAMERA_EASING: f64 = 0.05;
pub const CAMERA_DISTANCE: f64 = 5.0;
pub const FOV_DEGREES: f64 = 75.0;
pub const NEAR: f64 = 0.1;
pub const FAR: f64 = 1000.0;
/// World-space point size, scaled by perspective when drawn.
pub const PARTICLE_SIZE: f64 = 0.005;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vec3 { x, y, z }
    }

    fn sub(self, other: Vec3) -> Vec3 {
        Vec3::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    fn dot(self, other: Vec3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    fn cross(self, other: Vec3) -> Vec3 {
        Vec3::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    fn normalized(self) -> Vec3 {
        let len = self.dot(self).sqrt();
        if len == 0.0 {
            self
        } else {
            Vec3::new(self.x / len, self.y / len, self.z / len)
        }
    }
}

pub struct ParticleField {
    positions: Vec<Vec3>,
    rotation_x: f64,
    rotation_y: f64,
}

impl ParticleField {
    /// Scatters `count` points uniformly inside a cube of side `extent`
    /// centred on the origin.
    pub fn scatter<R: Rng>(count: usize, extent: f64, rng: &mut R) -> Self {
        let half = extent / 2.0;
        let positions = (0..count)
            .map(|_| {
                Vec3::new(
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                    rng.gen_range(-half..half),
                )
            })
            .collect();
        ParticleField {
            positions,
            rotation_x: 0.0,
            rotation_y: 0.0,
        }
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn rotation(&self) -> (f64, f64) {
        (self.rotation_x, self.rotation_y)
    }

    pub fn step(&mut self) {
        self.rotation_x += ROTATION_STEP;
        self.rotation_y += ROTATION_STEP;
    }

    /// Positions after the field's rotation (y first, then x).
    pub fn world_positions(&self) -> impl Iterator<Item = Vec3> + '_ {
        let (sin_x, cos_x) = self.rotation_x.sin_cos();
        let (sin_y, cos_y) = self.rotation_y.sin_cos();
        self.positions.iter().map(move |p| {
            let x = p.x * cos_y + p.z * sin_y;
            let z = -p.x * sin_y + p.z * cos_y;
            let y = p.y * cos_x - z * sin_x;
            let z = p.y * sin_x + z * cos_x;
            Vec3::new(x, y, z)
        })
    }
}

/// Maps a pointer position to its offset from the window centre.
pub fn pointer_offset(client_x: f64, client_y: f64, width: f64, height: f64) -> (f64, f64) {
    (client_x - width / 2.0, client_y - height / 2.0)
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Projected {
    pub x: f64,
    pub y: f64,
    pub size: f64,
}

/// Perspective camera that always looks at the origin.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    aspect: f64,
}

impl Camera {
    pub fn new(aspect: f64) -> Self {
        Camera {
            position: Vec3::new(0.0, 0.0, CAMERA_DISTANCE),
            aspect,
        }
    }

    pub fn aspect(&self) -> f64 {
        self.aspect
    }

    pub fn set_aspect(&mut self, aspect: f64) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Moves the camera a fraction of the way toward the pointer target.
    pub fn follow(&mut self, pointer: (f64, f64)) {
        let target_x = pointer.0 * POINTER_GAIN;
        let target_y = -pointer.1 * POINTER_GAIN;
        self.position.x += (target_x - self.position.x) * CAMERA_EASING;
        self.position.y += (target_y - self.position.y) * CAMERA_EASING;
    }

    /// Projects a world point onto a `width` x `height` viewport. Points
    /// outside the view frustum come back as `None`.
    pub fn project(&self, point: Vec3, width: f64, height: f64) -> Option<Projected> {
        let forward = Vec3::new(0.0, 0.0, 0.0).sub(self.position).normalized();
        let right = forward.cross(Vec3::new(0.0, 1.0, 0.0)).normalized();
        let up = right.cross(forward);

        let relative = point.sub(self.position);
        let depth = relative.dot(forward);
        if !(NEAR..=FAR).contains(&depth) {
            return None;
        }

        let focal = 1.0 / (FOV_DEGREES.to_radians() / 2.0).tan();
        let ndc_x = relative.dot(right) * focal / (self.aspect * depth);
        let ndc_y = relative.dot(up) * focal / depth;
        if ndc_x.abs() > 1.0 || ndc_y.abs() > 1.0 {
            return None;
        }

        Some(Projected {
            x: (ndc_x + 1.0) / 2.0 * width,
            y: (1.0 - ndc_y) / 2.0 * height,
            size: (PARTICLE_SIZE * focal * height / (2.0 * depth)).max(1.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn scatter_fills_the_cube() {
        let mut rng = StdRng::seed_from_u64(7);
        let field = ParticleField::scatter(PARTICLE_COUNT, FIELD_EXTENT, &mut rng);

        assert_eq!(field.len(), 5000);
        assert!(field
            .world_positions()
            .all(|p| p.x.abs() <= 5.0 && p.y.abs() <= 5.0 && p.z.abs() <= 5.0));
    }

    #[test]
    fn step_rotates_both_axes() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut field = ParticleField::scatter(10, FIELD_EXTENT, &mut rng);
        field.step();
        field.step();

        let (rx, ry) = field.rotation();
        assert!(close(rx, 0.0002));
        assert!(close(ry, 0.0002));
    }

    #[test]
    fn rotation_preserves_distance_from_origin() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut field = ParticleField::scatter(50, FIELD_EXTENT, &mut rng);
        let before: Vec<f64> = field.world_positions().map(|p| p.dot(p)).collect();
        for _ in 0..1000 {
            field.step();
        }
        let after: Vec<f64> = field.world_positions().map(|p| p.dot(p)).collect();

        for (a, b) in before.iter().zip(after.iter()) {
            assert!((a - b).abs() < 1e-9);
        }
    }

    #[test]
    fn camera_eases_toward_pointer() {
        let mut camera = Camera::new(16.0 / 9.0);
        camera.follow((400.0, -200.0));

        // One step covers 5% of the distance to (0.02, 0.01).
        assert!(close(camera.position.x, 0.02 * 0.05));
        assert!(close(camera.position.y, 0.01 * 0.05));

        for _ in 0..500 {
            camera.follow((400.0, -200.0));
        }
        assert!((camera.position.x - 0.02).abs() < 1e-6);
        assert!((camera.position.y - 0.01).abs() < 1e-6);
        assert!(close(camera.position.z, CAMERA_DISTANCE));
    }

    #[test]
    fn origin_projects_to_viewport_centre() {
        let camera = Camera::new(2.0);
        let p = camera.project(Vec3::new(0.0, 0.0, 0.0), 800.0, 400.0).unwrap();

        assert!(close(p.x, 400.0));
        assert!(close(p.y, 200.0));
        assert!(p.size >= 1.0);
    }

    #[test]
    fn up_and_right_map_to_screen_directions() {
        let camera = Camera::new(1.0);
        let up = camera.project(Vec3::new(0.0, 1.0, 0.0), 500.0, 500.0).unwrap();
        let right = camera.project(Vec3::new(1.0, 0.0, 0.0), 500.0, 500.0).unwrap();

        assert!(up.y < 250.0);
        assert!(right.x > 250.0);
    }

    #[test]
    fn points_behind_the_camera_are_culled() {
        let camera = Camera::new(1.0);
        assert!(camera.project(Vec3::new(0.0, 0.0, 6.0), 500.0, 500.0).is_none());
        assert!(camera.project(Vec3::new(0.0, 0.0, 4.95), 500.0, 500.0).is_none());
    }

    #[test]
    fn degenerate_aspect_is_ignored() {
        let mut camera = Camera::new(1.5);
        camera.set_aspect(0.0);
        camera.set_aspect(f64::NAN);
        assert!(close(camera.aspect(), 1.5));
        camera.set_aspect(2.0);
        assert!(close(camera.aspect(), 2.0));
    }

    #[test]
    fn pointer_offset_is_relative_to_centre() {
        assert_eq!(pointer_offset(500.0, 100.0, 1000.0, 800.0), (0.0, -300.0));
    }
}
