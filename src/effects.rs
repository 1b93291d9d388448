const CURSOR_DOT_OFFSET: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavigationMenu {
    open: bool,
}

impl NavigationMenu {
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PreloaderPhase {
    Visible,
    Fading,
    Hidden,
}

#[derive(Clone, Copy, Debug)]
pub struct Preloader {
    phase: PreloaderPhase,
    fade_ms: u32,
}

impl Preloader {
    pub fn new(fade_ms: u32) -> Self {
        Self {
            phase: PreloaderPhase::Visible,
            fade_ms,
        }
    }

    // Delay before `finish` should run.
    pub fn on_load(&mut self) -> Option<u32> {
        if self.phase != PreloaderPhase::Visible {
            return None;
        }

        self.phase = PreloaderPhase::Fading;
        Some(self.fade_ms)
    }

    pub fn finish(&mut self) {
        if self.phase == PreloaderPhase::Fading {
            self.phase = PreloaderPhase::Hidden;
        }
    }

    pub fn opacity(&self) -> &'static str {
        match self.phase {
            PreloaderPhase::Visible => "1",
            PreloaderPhase::Fading | PreloaderPhase::Hidden => "0",
        }
    }

    pub fn removed(&self) -> bool {
        self.phase == PreloaderPhase::Hidden
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct CursorFrame {
    pub dot: String,
    pub trail: String,
    pub show: bool,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct CursorFx {
    visible: bool,
}

impl CursorFx {
    pub fn on_move(&mut self, x: f64, y: f64) -> CursorFrame {
        let show = !self.visible;
        self.visible = true;

        CursorFrame {
            dot: translate(x - CURSOR_DOT_OFFSET, y - CURSOR_DOT_OFFSET),
            trail: translate(x, y),
            show,
        }
    }

    pub fn on_leave(&mut self) {
        self.visible = false;
    }
}

fn translate(x: f64, y: f64) -> String {
    format!("translate({x}px, {y}px)")
}

// Layer `i` moves `(i + 1)` times the base rate.
pub fn parallax_offsets(scroll_y: f64, layers: usize, factor: f64) -> Vec<f64> {
    let base = scroll_y * factor;
    (0..layers).map(|layer| base * (layer + 1) as f64).collect()
}

pub fn translate_y(offset: f64) -> String {
    format!("translateY({offset}px)")
}
