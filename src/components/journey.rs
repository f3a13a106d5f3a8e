use std::cmp::Ordering;

use rand::Rng;

use crate::components::icons::Icon;
use crate::config;

/// Position of a step in the patient journey. Only 1..=4 exist.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StepId(u8);

impl StepId {
    pub fn new(id: u8) -> Option<Self> {
        if (1..=STEPS.len() as u8).contains(&id) {
            Some(StepId(id))
        } else {
            None
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: StepId,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub meta: &'static str,
    pub icon: Icon,
}

pub const STEPS: [Step; 4] = [
    Step { id: StepId(1), title: "Onboarding", subtitle: "Profile Complete", meta: "Done", icon: Icon::ClipboardCheck },
    Step { id: StepId(2), title: "Biometrics", subtitle: "Analysis In-Progress", meta: "Now", icon: Icon::Microscope },
    Step { id: StepId(3), title: "Wellness Plan", subtitle: "Generating Roadmap", meta: "Next", icon: Icon::CalendarRange },
    Step { id: StepId(4), title: "Performance", subtitle: "Goal Tracking", meta: "Future", icon: Icon::Medal },
];

const INITIAL_STEP: StepId = StepId(2);

pub fn step(id: StepId) -> &'static Step {
    &STEPS[usize::from(id.0 - 1)]
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepStatus {
    Completed,
    Active,
    Pending,
}

/// How the step list under the hero icon is drawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TileLayout {
    /// The active step only appears in the hero, the list holds the other three.
    #[default]
    Focused,
    /// All four rows stay in the list, the active one highlighted.
    Full,
}

impl TileLayout {
    pub fn shows(self, status: StepStatus) -> bool {
        !(self == TileLayout::Focused && status == StepStatus::Active)
    }
}

/// Simulated state behind the patient status tile.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Journey {
    active: StepId,
    heart_rate: u32,
    scan_percent: u32,
}

impl Default for Journey {
    fn default() -> Self {
        Self::new()
    }
}

impl Journey {
    pub fn new() -> Self {
        Self {
            active: INITIAL_STEP,
            heart_rate: config::INITIAL_HEART_RATE,
            scan_percent: 0,
        }
    }

    pub fn active(&self) -> StepId {
        self.active
    }

    pub fn active_step(&self) -> &'static Step {
        step(self.active)
    }

    pub fn heart_rate(&self) -> u32 {
        self.heart_rate
    }

    pub fn scan_percent(&self) -> u32 {
        self.scan_percent
    }

    pub fn status_of(&self, id: StepId) -> StepStatus {
        match id.cmp(&self.active) {
            Ordering::Less => StepStatus::Completed,
            Ordering::Equal => StepStatus::Active,
            Ordering::Greater => StepStatus::Pending,
        }
    }

    /// Returns false when `id` was already active.
    pub fn select(&mut self, id: StepId) -> bool {
        if self.active == id {
            return false;
        }
        self.active = id;
        true
    }

    /// One heart-rate tick: a fair coin decides +1 or -1 BPM.
    pub fn beat<R: Rng + ?Sized>(&mut self, rng: &mut R) -> u32 {
        let rising = rng.gen_bool(0.5);
        self.nudge_heart_rate(rising)
    }

    pub fn nudge_heart_rate(&mut self, rising: bool) -> u32 {
        let next = if rising {
            self.heart_rate + 1
        } else {
            self.heart_rate.saturating_sub(1)
        };
        self.heart_rate = next.clamp(config::HEART_RATE_MIN, config::HEART_RATE_MAX);
        self.heart_rate
    }

    pub fn advance_scan(&mut self) -> u32 {
        self.scan_percent = (self.scan_percent + 1) % 100;
        self.scan_percent
    }

    pub fn rows(&self, layout: TileLayout) -> impl Iterator<Item = (&'static Step, StepStatus)> + '_ {
        STEPS
            .iter()
            .map(move |s| (s, self.status_of(s.id)))
            .filter(move |(_, status)| layout.shows(*status))
    }
}

// Stroke dash lengths of the two rings, rounded from 2πr as the artwork expects.
pub const SCAN_RING_DASH: f64 = 477.0;
pub const HEART_RING_DASH: f64 = 138.0;
pub const HEART_RING_FILL: f64 = 0.75;

/// `stroke-dashoffset` that leaves `fraction` of a ring drawn.
pub fn ring_offset(dash: f64, fraction: f64) -> f64 {
    dash - dash * fraction.clamp(0.0, 1.0)
}

pub fn scan_ring_offset(scan_percent: u32) -> f64 {
    ring_offset(SCAN_RING_DASH, f64::from(scan_percent) / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn id(n: u8) -> StepId {
        StepId::new(n).unwrap()
    }

    #[test]
    fn mounts_on_biometrics_at_rest() {
        let journey = Journey::new();
        assert_eq!(journey.active(), id(2));
        assert_eq!(journey.active_step().title, "Biometrics");
        assert_eq!(journey.heart_rate(), 98);
        assert_eq!(journey.scan_percent(), 0);
    }

    #[test]
    fn step_ids_outside_the_journey_are_rejected() {
        assert_eq!(StepId::new(0), None);
        assert_eq!(StepId::new(5), None);
        assert_eq!(StepId::new(4).map(StepId::get), Some(4));
    }

    #[test]
    fn steps_are_ordered_and_looked_up_by_id() {
        for (i, s) in STEPS.iter().enumerate() {
            assert_eq!(usize::from(s.id.get()), i + 1);
            assert_eq!(step(s.id), s);
        }
    }

    #[test]
    fn exactly_one_step_is_active_and_the_rest_split_around_it() {
        let mut journey = Journey::new();
        for active in 1..=4 {
            journey.select(id(active));
            let statuses: Vec<_> = STEPS.iter().map(|s| journey.status_of(s.id)).collect();
            assert_eq!(statuses.iter().filter(|s| **s == StepStatus::Active).count(), 1);
            for s in STEPS.iter() {
                let expected = match s.id.get().cmp(&active) {
                    Ordering::Less => StepStatus::Completed,
                    Ordering::Equal => StepStatus::Active,
                    Ordering::Greater => StepStatus::Pending,
                };
                assert_eq!(journey.status_of(s.id), expected);
            }
        }
    }

    #[test]
    fn selecting_a_step_moves_the_hero() {
        let mut journey = Journey::new();
        assert!(journey.select(id(4)));
        assert_eq!(journey.active_step().title, "Performance");
        assert_eq!(journey.active_step().icon, Icon::Medal);
        assert_eq!(journey.status_of(id(1)), StepStatus::Completed);
        assert_eq!(journey.status_of(id(3)), StepStatus::Completed);

        assert!(journey.select(id(1)));
        assert_eq!(journey.status_of(id(2)), StepStatus::Pending);
        assert_eq!(journey.status_of(id(4)), StepStatus::Pending);
    }

    #[test]
    fn reselecting_the_active_step_changes_nothing() {
        let mut journey = Journey::new();
        let before = journey.clone();
        assert!(!journey.select(id(2)));
        assert_eq!(journey, before);
    }

    #[test]
    fn heart_rate_never_leaves_its_band() {
        for seed in 0..32 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut journey = Journey::new();
            for _ in 0..2_000 {
                let bpm = journey.beat(&mut rng);
                assert!((90..=105).contains(&bpm), "seed {seed} produced {bpm}");
            }
        }
    }

    #[test]
    fn heart_rate_clamps_at_both_ends() {
        let mut journey = Journey::new();
        for _ in 0..20 {
            journey.nudge_heart_rate(true);
        }
        assert_eq!(journey.heart_rate(), 105);
        assert_eq!(journey.nudge_heart_rate(false), 104);

        for _ in 0..40 {
            journey.nudge_heart_rate(false);
        }
        assert_eq!(journey.heart_rate(), 90);
        assert_eq!(journey.nudge_heart_rate(true), 91);
    }

    #[test]
    fn heart_rate_moves_one_beat_per_tick() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut journey = Journey::new();
        let mut last = journey.heart_rate();
        for _ in 0..500 {
            let bpm = journey.beat(&mut rng);
            assert!(bpm.abs_diff(last) <= 1);
            last = bpm;
        }
    }

    #[test]
    fn heart_rate_rises_and_falls_about_equally() {
        let mut rng = StdRng::seed_from_u64(2024);
        let ticks = 10_000;
        let mut rises = 0;
        for _ in 0..ticks {
            // Start each tick mid-band so no clamp hides the direction.
            let mut journey = Journey::new();
            match journey.beat(&mut rng) {
                99 => rises += 1,
                97 => {}
                other => panic!("one tick from 98 landed on {other}"),
            }
        }
        let falls = ticks - rises;
        assert!(rises > 0 && falls > 0);
        let share = f64::from(rises) / f64::from(ticks);
        assert!((share - 0.5).abs() < 0.03, "rise share {share}");
    }

    #[test]
    fn scan_wraps_back_to_zero() {
        let mut journey = Journey::new();
        for n in 1..=250u32 {
            assert_eq!(journey.advance_scan(), n % 100);
        }
        assert_eq!(journey.scan_percent(), 50);
    }

    #[test]
    fn focused_layout_hides_the_active_row() {
        let mut journey = Journey::new();
        journey.select(id(3));
        let rows: Vec<_> = journey
            .rows(TileLayout::Focused)
            .map(|(s, status)| (s.id.get(), status))
            .collect();
        assert_eq!(
            rows,
            vec![
                (1, StepStatus::Completed),
                (2, StepStatus::Completed),
                (4, StepStatus::Pending),
            ]
        );
    }

    #[test]
    fn full_layout_keeps_every_row() {
        let journey = Journey::new();
        let statuses: Vec<_> = journey.rows(TileLayout::Full).map(|(_, status)| status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Active,
                StepStatus::Pending,
                StepStatus::Pending,
            ]
        );
    }

    #[test]
    fn scan_ring_tracks_percentage() {
        assert_eq!(scan_ring_offset(0), 477.0);
        assert_eq!(scan_ring_offset(50), 238.5);
        assert!((scan_ring_offset(99) - 4.77).abs() < 1e-9);
        assert_eq!(ring_offset(HEART_RING_DASH, HEART_RING_FILL), 34.5);
        assert_eq!(ring_offset(100.0, 1.5), 0.0);
    }
}
