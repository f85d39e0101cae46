use crate::error::InputError;
use crate::model::{CalculationResult, RawInputs};
use crate::session::{HistoryLog, Session};
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{DefaultTerminal, Frame};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum View {
    Calculator,
    History,
}

/// Range and step of a numeric slider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderLimits {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderLimits {
    const fn new(max: f64, step: f64) -> Self {
        Self {
            min: 0.0,
            max,
            step,
        }
    }

    /// Position of `value` within the range, in [0, 1].
    #[must_use]
    pub fn ratio(&self, value: f64) -> f64 {
        if self.max <= self.min {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}

/// Input form fields, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Country,
    Distance,
    Electricity,
    Waste,
    Shopping,
    ShortFlights,
    MediumFlights,
    LongFlights,
    HeatingFuel,
    HeatingUsage,
}

impl Field {
    pub const ALL: [Self; 10] = [
        Self::Country,
        Self::Distance,
        Self::Electricity,
        Self::Waste,
        Self::Shopping,
        Self::ShortFlights,
        Self::MediumFlights,
        Self::LongFlights,
        Self::HeatingFuel,
        Self::HeatingUsage,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Country => "Country",
            Self::Distance => "Daily commute distance (km)",
            Self::Electricity => "Monthly electricity use (kWh)",
            Self::Waste => "Waste generated per week (kg)",
            Self::Shopping => "Monthly spending on goods (₹)",
            Self::ShortFlights => "Short-haul flights (0-1500km)",
            Self::MediumFlights => "Medium-haul flights (1500-4000km)",
            Self::LongFlights => "Long-haul flights (4000km+)",
            Self::HeatingFuel => "Primary heating fuel",
            Self::HeatingUsage => "Monthly heating usage",
        }
    }

    /// Slider range for continuous fields; `None` for selectors and counters.
    #[must_use]
    pub fn limits(self) -> Option<SliderLimits> {
        match self {
            Self::Distance => Some(SliderLimits::new(100.0, 1.0)),
            Self::Electricity => Some(SliderLimits::new(1000.0, 10.0)),
            Self::Waste => Some(SliderLimits::new(100.0, 1.0)),
            Self::Shopping => Some(SliderLimits::new(50_000.0, 1000.0)),
            Self::HeatingUsage => Some(SliderLimits::new(500.0, 5.0)),
            _ => None,
        }
    }
}

pub struct App<'m> {
    pub session: Session<'m>,
    pub country: String,
    pub inputs: RawInputs,
    pub view: View,
    pub selected_field: usize,
    pub last_result: Option<CalculationResult>,
    pub last_error: Option<String>,
    pub history_scroll_offset: usize,
    pub should_quit: bool,
}

impl<'m> App<'m> {
    #[must_use]
    pub fn new(session: Session<'m>, country: String, inputs: RawInputs) -> Self {
        let inputs = clamp_to_limits(inputs);
        Self {
            session,
            country,
            inputs,
            view: View::Calculator,
            selected_field: 0,
            last_result: None,
            last_error: None,
            history_scroll_offset: 0,
            should_quit: false,
        }
    }

    /// Runs the event loop until quit, then ends the session and returns its history.
    pub fn run(mut self, mut terminal: DefaultTerminal) -> Result<HistoryLog> {
        while !self.should_quit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(self.session.end())
    }

    fn draw(&self, frame: &mut Frame) {
        match self.view {
            View::Calculator => super::dashboard::draw_calculator(frame, self),
            View::History => super::dashboard::draw_history(frame, self),
        }
    }

    fn handle_events(&mut self) -> Result<()> {
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }
            self.handle_key(key.code);
        }
        Ok(())
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match self.view {
            View::Calculator => self.handle_calculator_keys(code),
            View::History => self.handle_history_keys(code),
        }
    }

    fn handle_calculator_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.previous_field(),
            KeyCode::Down | KeyCode::Char('j') => self.next_field(),
            KeyCode::Left | KeyCode::Char('h') => self.adjust(-1.0),
            KeyCode::Right | KeyCode::Char('l') => self.adjust(1.0),
            KeyCode::PageDown => self.adjust(-10.0),
            KeyCode::PageUp => self.adjust(10.0),
            KeyCode::Enter | KeyCode::Char('c') => self.calculate(),
            KeyCode::Char('H') | KeyCode::Tab => self.toggle_history(),
            _ => {}
        }
    }

    fn handle_history_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('H') | KeyCode::Tab => {
                self.toggle_history();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.history_scroll_offset = self.history_scroll_offset.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let max = self.session.history().len().saturating_sub(1);
                if self.history_scroll_offset < max {
                    self.history_scroll_offset += 1;
                }
            }
            _ => {}
        }
    }

    #[must_use]
    pub fn selected(&self) -> Field {
        Field::ALL[self.selected_field]
    }

    fn previous_field(&mut self) {
        if self.selected_field > 0 {
            self.selected_field -= 1;
        }
    }

    fn next_field(&mut self) {
        if self.selected_field < Field::ALL.len() - 1 {
            self.selected_field += 1;
        }
    }

    /// Moves the selected field by `steps` slider steps (negative = down).
    fn adjust(&mut self, steps: f64) {
        let field = self.selected();
        match field {
            Field::Country => self.cycle_country(steps > 0.0),
            Field::HeatingFuel => {
                self.inputs.heating_fuel = if steps > 0.0 {
                    self.inputs.heating_fuel.next()
                } else {
                    self.inputs.heating_fuel.previous()
                };
            }
            Field::ShortFlights => step_count(&mut self.inputs.short_flights, steps),
            Field::MediumFlights => step_count(&mut self.inputs.medium_flights, steps),
            Field::LongFlights => step_count(&mut self.inputs.long_flights, steps),
            Field::Distance
            | Field::Electricity
            | Field::Waste
            | Field::Shopping
            | Field::HeatingUsage => {
                if let (Some(limits), Some(value)) = (field.limits(), self.slider_value_mut(field))
                {
                    *value = (*value + limits.step * steps).clamp(limits.min, limits.max);
                }
            }
        }
    }

    fn cycle_country(&mut self, forward: bool) {
        let countries: Vec<&str> = self.session.model().countries().collect();
        if countries.is_empty() {
            return;
        }
        let current = countries
            .iter()
            .position(|c| *c == self.country)
            .unwrap_or(0);
        let next = if forward {
            (current + 1) % countries.len()
        } else {
            (current + countries.len() - 1) % countries.len()
        };
        self.country = countries[next].to_string();
    }

    fn slider_value_mut(&mut self, field: Field) -> Option<&mut f64> {
        match field {
            Field::Distance => Some(&mut self.inputs.distance_km),
            Field::Electricity => Some(&mut self.inputs.electricity_kwh),
            Field::Waste => Some(&mut self.inputs.waste_kg),
            Field::Shopping => Some(&mut self.inputs.shopping_spend),
            Field::HeatingUsage => Some(&mut self.inputs.heating_usage),
            _ => None,
        }
    }

    /// Current value of a slider field.
    #[must_use]
    pub fn slider_value(&self, field: Field) -> Option<f64> {
        slider_value(&self.inputs, field)
    }

    /// Display value for a field in the input form.
    #[must_use]
    pub fn field_value(&self, field: Field) -> String {
        match field {
            Field::Country => self.country.clone(),
            Field::HeatingFuel => self.inputs.heating_fuel.to_string(),
            Field::ShortFlights => self.inputs.short_flights.to_string(),
            Field::MediumFlights => self.inputs.medium_flights.to_string(),
            Field::LongFlights => self.inputs.long_flights.to_string(),
            _ => self
                .slider_value(field)
                .map(|v| format!("{v:.0}"))
                .unwrap_or_default(),
        }
    }

    fn calculate(&mut self) {
        match self.session.calculate(&self.country, &self.inputs) {
            Ok(result) => {
                self.last_result = Some(result);
                self.last_error = None;
            }
            Err(e) => {
                self.last_result = None;
                self.last_error = Some(e.to_string());
            }
        }
        debug!(
            entries = self.session.history().len(),
            ok = self.last_error.is_none(),
            "calculate pressed"
        );
    }

    fn toggle_history(&mut self) {
        self.view = match self.view {
            View::Calculator => View::History,
            View::History => View::Calculator,
        };
        self.history_scroll_offset = 0;
    }
}

fn step_count(count: &mut u32, steps: f64) {
    let delta = steps.abs() as u32;
    *count = if steps > 0.0 {
        count.saturating_add(delta)
    } else {
        count.saturating_sub(delta)
    };
}

fn slider_value(inputs: &RawInputs, field: Field) -> Option<f64> {
    match field {
        Field::Distance => Some(inputs.distance_km),
        Field::Electricity => Some(inputs.electricity_kwh),
        Field::Waste => Some(inputs.waste_kg),
        Field::Shopping => Some(inputs.shopping_spend),
        Field::HeatingUsage => Some(inputs.heating_usage),
        _ => None,
    }
}

/// Rejects slider values the calculator form could not have produced.
///
/// Shopping spend must also sit on a whole step; the other sliders accept
/// any value inside their range.
///
/// # Errors
///
/// Returns [`InputError::OutOfRange`] for a value outside its slider range
/// (including NaN) and [`InputError::OffStep`] for a shopping spend between
/// two steps.
pub fn check_limits(inputs: &RawInputs) -> Result<(), InputError> {
    for field in Field::ALL {
        let (Some(limits), Some(value)) = (field.limits(), slider_value(inputs, field)) else {
            continue;
        };
        if !(limits.min..=limits.max).contains(&value) {
            return Err(InputError::OutOfRange {
                field: field.label(),
                value,
                min: limits.min,
                max: limits.max,
            });
        }
        if field == Field::Shopping && (value / limits.step).fract() != 0.0 {
            return Err(InputError::OffStep {
                field: field.label(),
                value,
                step: limits.step,
            });
        }
    }
    Ok(())
}

/// Brings slider fields into their ranges; seeded values may come from the CLI.
fn clamp_to_limits(mut inputs: RawInputs) -> RawInputs {
    for (field, value) in [
        (Field::Distance, &mut inputs.distance_km),
        (Field::Electricity, &mut inputs.electricity_kwh),
        (Field::Waste, &mut inputs.waste_kg),
        (Field::Shopping, &mut inputs.shopping_spend),
        (Field::HeatingUsage, &mut inputs.heating_usage),
    ] {
        if let Some(limits) = field.limits() {
            if value.is_finite() {
                *value = (*value).clamp(limits.min, limits.max);
            } else {
                *value = limits.min;
            }
        }
    }
    inputs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calc::EmissionModel;
    use crate::model::FuelType;
    use pretty_assertions::assert_eq;

    fn press(app: &mut App<'_>, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    fn new_app(model: &EmissionModel) -> App<'_> {
        App::new(
            Session::start(model),
            "India".to_string(),
            RawInputs::default(),
        )
    }

    #[test]
    fn form_defaults_pass_limit_check() {
        assert!(check_limits(&RawInputs::default()).is_ok());

        let edges = RawInputs {
            distance_km: 100.0,
            electricity_kwh: 1000.0,
            waste_kg: 100.0,
            shopping_spend: 50_000.0,
            heating_usage: 500.0,
            long_flights: 40,
            ..RawInputs::default()
        };
        assert!(check_limits(&edges).is_ok());
    }

    #[test]
    fn limit_check_rejects_values_beyond_sliders() {
        let far_commute = RawInputs {
            distance_km: 5000.0,
            ..RawInputs::default()
        };
        assert!(matches!(
            check_limits(&far_commute),
            Err(InputError::OutOfRange { value, max, .. }) if value == 5000.0 && max == 100.0
        ));

        let no_heating = RawInputs {
            heating_usage: f64::NAN,
            ..RawInputs::default()
        };
        assert!(matches!(
            check_limits(&no_heating),
            Err(InputError::OutOfRange { field: "Monthly heating usage", .. })
        ));
    }

    #[test]
    fn limit_check_rejects_shopping_between_steps() {
        let inputs = RawInputs {
            shopping_spend: 1234.0,
            ..RawInputs::default()
        };
        let err = check_limits(&inputs).unwrap_err();
        assert!(matches!(
            err,
            InputError::OffStep { value, step, .. } if value == 1234.0 && step == 1000.0
        ));
        assert_eq!(
            err.to_string(),
            "Monthly spending on goods (₹) must be a multiple of 1000, got 1234"
        );
    }

    #[test]
    fn sliders_step_and_clamp() {
        let model = EmissionModel::builtin();
        let mut app = new_app(&model);

        press(&mut app, &[KeyCode::Down, KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.inputs.distance_km, 2.0);

        press(&mut app, &[KeyCode::Left, KeyCode::Left, KeyCode::Left]);
        assert_eq!(app.inputs.distance_km, 0.0);

        for _ in 0..20 {
            app.handle_key(KeyCode::PageUp);
        }
        assert_eq!(app.inputs.distance_km, 100.0);
    }

    #[test]
    fn shopping_moves_in_thousands() {
        let model = EmissionModel::builtin();
        let mut app = new_app(&model);
        app.selected_field = 4;
        assert_eq!(app.selected(), Field::Shopping);

        press(&mut app, &[KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.inputs.shopping_spend, 2000.0);
    }

    #[test]
    fn flight_counts_never_go_negative() {
        let model = EmissionModel::builtin();
        let mut app = new_app(&model);
        app.selected_field = 7;

        press(&mut app, &[KeyCode::Left, KeyCode::Right, KeyCode::Right]);
        assert_eq!(app.inputs.long_flights, 2);
    }

    #[test]
    fn fuel_selector_cycles() {
        let model = EmissionModel::builtin();
        let mut app = new_app(&model);
        app.selected_field = 8;

        app.handle_key(KeyCode::Right);
        assert_eq!(app.inputs.heating_fuel, FuelType::Lpg);
        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Left);
        assert_eq!(app.inputs.heating_fuel, FuelType::Wood);
    }

    #[test]
    fn calculate_records_result_and_history() {
        let model = EmissionModel::builtin();
        let mut app = new_app(&model);
        app.inputs.distance_km = 10.0;

        app.handle_key(KeyCode::Enter);
        app.handle_key(KeyCode::Char('c'));

        assert_eq!(app.last_result.as_ref().map(CalculationResult::trees_needed), Some(25));
        assert_eq!(app.session.history().len(), 2);
        assert!(app.last_error.is_none());
    }

    #[test]
    fn unknown_country_shows_error_and_keeps_history() {
        let model = EmissionModel::builtin();
        let mut app = App::new(
            Session::start(&model),
            "Atlantis".to_string(),
            RawInputs::default(),
        );

        app.handle_key(KeyCode::Enter);

        assert!(app.last_result.is_none());
        assert_eq!(app.last_error.as_deref(), Some("unknown country 'Atlantis'"));
        assert!(app.session.history().is_empty());
    }

    #[test]
    fn history_toggle_and_quit() {
        let model = EmissionModel::builtin();
        let mut app = new_app(&model);

        app.handle_key(KeyCode::Tab);
        assert_eq!(app.view, View::History);
        app.handle_key(KeyCode::Esc);
        assert_eq!(app.view, View::Calculator);
        assert!(!app.should_quit);
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn seeded_inputs_are_clamped() {
        let model = EmissionModel::builtin();
        let inputs = RawInputs {
            distance_km: 250.0,
            waste_kg: -4.0,
            ..RawInputs::default()
        };
        let app = App::new(Session::start(&model), "India".to_string(), inputs);
        assert_eq!(app.inputs.distance_km, 100.0);
        assert_eq!(app.inputs.waste_kg, 0.0);
    }

    #[test]
    fn slider_ratio_is_bounded() {
        let limits = Field::Waste.limits().unwrap();
        assert_eq!(limits.ratio(50.0), 0.5);
        assert_eq!(limits.ratio(500.0), 1.0);
    }
}
