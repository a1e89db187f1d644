/// The drive's companion charge buffer. Engaging supercruise and leaping
/// both require a full buffer, and every drive state change stops the
/// converter and voids the charge, so consecutive uses are paced by the
/// recharge rate. The drive receives this component explicitly; it never
/// scans its vessel for one.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ChargeGenerator {
    charge: f64,
    capacity: f64,
    /// Charge units gained per second while running.
    rate: f64,
    running: bool,
}

impl ChargeGenerator {
    /// Width of the textual charge bar in characters.
    const BAR_WIDTH: usize = 20;
    /// Fill character of the textual charge bar.
    const BAR_UNIT: char = '/';

    pub fn new(capacity: f64, rate: f64) -> Self {
        Self {
            charge: 0.0,
            capacity,
            rate,
            running: true,
        }
    }

    pub fn charge(&self) -> f64 { self.charge }

    pub fn capacity(&self) -> f64 { self.capacity }

    pub fn is_running(&self) -> bool { self.running }

    pub fn is_full(&self) -> bool { self.charge >= self.capacity }

    pub fn start(&mut self) { self.running = true; }

    /// Stops the converter and voids whatever charge was accumulated.
    pub fn stop(&mut self) {
        self.charge = 0.0;
        self.running = false;
    }

    /// Advances the buffer by one timestep.
    pub fn recharge(&mut self, dt: f64) {
        if self.running {
            self.charge = (self.charge + self.rate * dt).min(self.capacity);
        }
    }

    /// Renders the charge level as a progress bar for the HUD.
    pub fn charge_bar(&self) -> String {
        let filled = if self.capacity > 0.0 {
            ((self.charge / self.capacity) * Self::BAR_WIDTH as f64) as usize
        } else {
            Self::BAR_WIDTH
        };
        let filled = filled.min(Self::BAR_WIDTH);
        format!(
            "[{}{}]",
            Self::BAR_UNIT.to_string().repeat(filled),
            " ".repeat(Self::BAR_WIDTH - filled)
        )
    }
}
