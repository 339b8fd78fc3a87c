// Confetti particle bursts.
//
// A burst is described by a [`BurstConfig`] and turned into particles by
// [`ConfettiSystem::fire`]. Each animation frame [`ConfettiSystem::step`]
// advances the physics (launch velocity with decay, gravity, drift, wobble
// and tilt) and drops particles once their lifetime in ticks runs out.
// Coordinates are in CSS pixels with y pointing down.

use rand::Rng;
use smallvec::{smallvec, SmallVec};
use std::f32::consts::PI;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Shape {
    Square,
    Circle,
    Star,
    Heart,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::from_u32(0xffffff);

    pub const fn from_u32(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Parse `#rrggbb` or `#rgb`.
    pub fn parse(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#')?;
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(Self::from_u32),
            3 => {
                let v = u32::from_str_radix(hex, 16).ok()?;
                let (r, g, b) = ((v >> 8) & 0xf, (v >> 4) & 0xf, v & 0xf);
                Some(Self::from_u32((r * 17) << 16 | (g * 17) << 8 | b * 17))
            }
            _ => None,
        }
    }

    pub fn to_css(self, alpha: f32) -> String {
        format!(
            "rgba({}, {}, {}, {:.3})",
            self.r,
            self.g,
            self.b,
            alpha.clamp(0.0, 1.0)
        )
    }
}

/// Launch point as fractions of the viewport (0,0 top-left, 1,1 bottom-right).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Default for Origin {
    fn default() -> Self {
        Self { x: 0.5, y: 0.5 }
    }
}

pub const DEFAULT_COLORS: [u32; 7] = [
    0x26ccff, 0xa25afd, 0xff5e7e, 0x88ff5a, 0xfcff42, 0xffa62d, 0xff36ff,
];

/// Parameters of a single burst. Angles are in degrees, 90 points straight up.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstConfig {
    pub particle_count: u32,
    pub angle: f32,
    pub spread: f32,
    pub start_velocity: f32,
    pub decay: f32,
    pub gravity: f32,
    pub drift: f32,
    pub ticks: u32,
    pub origin: Origin,
    pub colors: SmallVec<[Rgb; 8]>,
    pub shapes: SmallVec<[Shape; 4]>,
    pub scalar: f32,
    pub z_index: i32,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 50,
            angle: 90.0,
            spread: 45.0,
            start_velocity: 45.0,
            decay: 0.9,
            gravity: 1.0,
            drift: 0.0,
            ticks: 200,
            origin: Origin::default(),
            colors: DEFAULT_COLORS.iter().map(|&c| Rgb::from_u32(c)).collect(),
            shapes: smallvec![Shape::Square, Shape::Circle],
            scalar: 1.0,
            z_index: 100,
        }
    }
}

/// Backing-store size of the overlay canvas for a CSS viewport.
///
/// Physics constants are in CSS pixels, so the overlay is never scaled by the
/// device pixel ratio.
pub fn overlay_size(css_width: f64, css_height: f64) -> (u32, u32) {
    let w = css_width.round().max(1.0) as u32;
    let h = css_height.round().max(1.0) as u32;
    (w, h)
}

/// Build a color list from `#rrggbb` strings, skipping malformed entries.
pub fn palette(hexes: &[&str]) -> SmallVec<[Rgb; 8]> {
    hexes.iter().filter_map(|h| Rgb::parse(h)).collect()
}

#[derive(Clone, Debug)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub color: Rgb,
    pub shape: Shape,
    pub scalar: f32,
    wobble: f32,
    wobble_speed: f32,
    velocity: f32,
    angle_2d: f32,
    tilt_angle: f32,
    tick: u32,
    total_ticks: u32,
    decay: f32,
    drift: f32,
    gravity: f32,
    random: f32,
    tilt_sin: f32,
    tilt_cos: f32,
    wobble_x: f32,
    wobble_y: f32,
    opacity: f32,
}

const OVAL_SCALAR: f32 = 0.6;

impl Particle {
    fn spawn<R: Rng + ?Sized>(
        cfg: &BurstConfig,
        x: f32,
        y: f32,
        color: Rgb,
        shape: Shape,
        rng: &mut R,
    ) -> Self {
        let rad_angle = cfg.angle.to_radians();
        let rad_spread = cfg.spread.to_radians();
        Self {
            x,
            y,
            color,
            shape,
            scalar: cfg.scalar,
            wobble: rng.gen::<f32>() * 10.0,
            wobble_speed: (rng.gen::<f32>() * 0.1 + 0.05).min(0.11),
            velocity: cfg.start_velocity * 0.5 + rng.gen::<f32>() * cfg.start_velocity,
            angle_2d: -rad_angle + (0.5 * rad_spread - rng.gen::<f32>() * rad_spread),
            tilt_angle: (rng.gen::<f32>() * 0.5 + 0.25) * PI,
            tick: 0,
            total_ticks: cfg.ticks.max(1),
            decay: cfg.decay,
            drift: cfg.drift,
            gravity: cfg.gravity * 3.0,
            random: rng.gen::<f32>() + 2.0,
            tilt_sin: 0.0,
            tilt_cos: 0.0,
            wobble_x: x,
            wobble_y: y,
            opacity: 1.0,
        }
    }

    /// Advance one frame. Returns false once the particle has expired.
    fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        self.x += self.angle_2d.cos() * self.velocity + self.drift;
        self.y += self.angle_2d.sin() * self.velocity + self.gravity;
        self.velocity *= self.decay;

        self.wobble += self.wobble_speed;
        self.wobble_x = self.x + 10.0 * self.scalar * self.wobble.cos();
        self.wobble_y = self.y + 10.0 * self.scalar * self.wobble.sin();
        self.tilt_angle += 0.1;
        self.tilt_sin = self.tilt_angle.sin();
        self.tilt_cos = self.tilt_angle.cos();
        self.random = rng.gen::<f32>() + 2.0;

        self.opacity = 1.0 - self.tick as f32 / self.total_ticks as f32;
        self.tick += 1;
        self.tick < self.total_ticks
    }

    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Tilted, wobbling quad used for square confetti.
    pub fn quad(&self) -> [[f32; 2]; 4] {
        let x1 = self.x + self.random * self.tilt_cos;
        let y1 = self.y + self.random * self.tilt_sin;
        let x2 = self.wobble_x + self.random * self.tilt_cos;
        let y2 = self.wobble_y + self.random * self.tilt_sin;
        [
            [self.x.floor(), self.y.floor()],
            [self.wobble_x.floor(), y1.floor()],
            [x2.floor(), y2.floor()],
            [x1.floor(), self.wobble_y.floor()],
        ]
    }

    /// Center, radii and rotation of the ellipse bounding round shapes.
    pub fn ellipse(&self) -> ([f32; 2], [f32; 2], f32) {
        let x1 = self.x + self.random * self.tilt_cos;
        let y1 = self.y + self.random * self.tilt_sin;
        let x2 = self.wobble_x + self.random * self.tilt_cos;
        let y2 = self.wobble_y + self.random * self.tilt_sin;
        (
            [self.x, self.y],
            [
                (x2 - x1).abs() * OVAL_SCALAR,
                (y2 - y1).abs() * OVAL_SCALAR,
            ],
            PI / 10.0 * self.wobble,
        )
    }

    /// Outline of a five-pointed star around the particle position.
    pub fn star(&self) -> [[f32; 2]; 10] {
        let inner = 4.0 * self.scalar;
        let outer = 8.0 * self.scalar;
        let step = PI / 5.0;
        let mut rot = PI / 2.0 * 3.0;
        let mut pts = [[0.0; 2]; 10];
        for (i, p) in pts.iter_mut().enumerate() {
            let r = if i % 2 == 0 { outer } else { inner };
            *p = [self.x + rot.cos() * r, self.y + rot.sin() * r];
            rot += step;
        }
        pts
    }
}

/// All live confetti on the page.
pub struct ConfettiSystem<R: Rng> {
    particles: Vec<Particle>,
    rng: R,
    z_index: i32,
}

impl<R: Rng> ConfettiSystem<R> {
    pub fn new(rng: R) -> Self {
        Self {
            particles: Vec::new(),
            rng,
            z_index: BurstConfig::default().z_index,
        }
    }

    /// Spawn a burst into a `width` x `height` viewport. Returns how many
    /// particles were added.
    pub fn fire(&mut self, cfg: &BurstConfig, width: f32, height: f32) -> usize {
        let start_x = width * cfg.origin.x;
        let start_y = height * cfg.origin.y;
        let count = cfg.particle_count as usize;
        self.particles.reserve(count);
        for i in 0..count {
            let color = if cfg.colors.is_empty() {
                Rgb::WHITE
            } else {
                cfg.colors[(count - 1 - i) % cfg.colors.len()]
            };
            let shape = if cfg.shapes.is_empty() {
                Shape::Square
            } else {
                cfg.shapes[self.rng.gen_range(0..cfg.shapes.len())]
            };
            let p = Particle::spawn(cfg, start_x, start_y, color, shape, &mut self.rng);
            self.particles.push(p);
        }
        self.z_index = cfg.z_index;
        count
    }

    /// Advance every particle one frame and drop the expired ones.
    pub fn step(&mut self) -> usize {
        let rng = &mut self.rng;
        self.particles.retain_mut(|p| p.step(rng));
        self.particles.len()
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn is_idle(&self) -> bool {
        self.particles.is_empty()
    }

    /// Stacking order requested by the most recent burst.
    pub fn z_index(&self) -> i32 {
        self.z_index
    }
}
