//! Scroll and pointer driven transforms.
//!
//! Pure math lives here so it can be tested without a browser; the reactive
//! hooks that feed it live in `app::motion`.

/// Maps `progress` from `input` onto `output`, clamping outside the input range.
pub fn interpolate(progress: f64, input: (f64, f64), output: (f64, f64)) -> f64 {
    let (in_start, in_end) = input;
    let (out_start, out_end) = output;
    if in_end == in_start {
        return out_start;
    }
    let t = ((progress - in_start) / (in_end - in_start)).clamp(0.0, 1.0);
    out_start + (out_end - out_start) * t
}

/// Fraction of the page scrolled, in `[0, 1]`.
pub fn scroll_progress(scroll_y: f64, max_scroll: f64) -> f64 {
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_y / max_scroll).clamp(0.0, 1.0)
}

pub fn stagger_delay(index: usize, step_ms: u32) -> String {
    format!("transition-delay: {}ms;", index as u64 * step_ms as u64)
}

/// Rotation `(x, y)` in degrees that leans an element toward the pointer.
///
/// `pointer` is relative to the element's top-left corner.
pub fn tilt(pointer: (f64, f64), size: (f64, f64), max_deg: f64) -> (f64, f64) {
    let (px, py) = pointer;
    let (width, height) = size;
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    let dx = (px / width - 0.5).clamp(-0.5, 0.5) * 2.0;
    let dy = (py / height - 0.5).clamp(-0.5, 0.5) * 2.0;
    (-dy * max_deg, dx * max_deg)
}

/// Scroll-linked pose of the hero terminal card.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerminalPose {
    pub translate_y: f64,
    pub rotate_x: f64,
    pub opacity: f64,
}

impl TerminalPose {
    pub fn at(progress: f64) -> Self {
        Self {
            translate_y: interpolate(progress, (0.0, 0.5), (0.0, -50.0)),
            rotate_x: interpolate(progress, (0.0, 0.5), (0.0, -5.0)),
            opacity: interpolate(progress, (0.0, 0.5), (1.0, 0.0)),
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: translateY({:.2}px) rotateX({:.2}deg); opacity: {:.3};",
            self.translate_y, self.rotate_x, self.opacity
        )
    }
}

/// Scroll-linked pose of the about-section avatar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AvatarPose {
    pub rotate_x: f64,
    pub rotate_y: f64,
    pub scale: f64,
}

impl AvatarPose {
    pub fn at(progress: f64) -> Self {
        Self {
            rotate_x: interpolate(progress, (0.0, 0.5), (0.0, -8.0)),
            rotate_y: interpolate(progress, (0.0, 0.5), (0.0, 15.0)),
            scale: interpolate(progress, (0.0, 0.5), (1.0, 1.08)),
        }
    }

    /// Adds a pointer tilt on top of the scroll pose.
    pub fn leaning(self, (x, y): (f64, f64)) -> Self {
        Self {
            rotate_x: self.rotate_x + x,
            rotate_y: self.rotate_y + y,
            ..self
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3});",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}
