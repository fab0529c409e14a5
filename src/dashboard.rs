//! Selector state that re-projects and re-renders on every change

use chrono::NaiveDate;

use crate::data::Dataset;
use crate::output::{print_error, print_warning};
use crate::projection::{ChartKind, ChartProjection, Mode, ViewState, available_dates, project};
use crate::surface::RenderSlot;

/// Result of one recompute-and-render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RefreshOutcome {
    pub(crate) points: usize,
    pub(crate) failed: usize,
}

pub(crate) struct Dashboard {
    dataset: Dataset,
    dates: Vec<NaiveDate>,
    view: ViewState,
    projection: ChartProjection,
    slots: Vec<RenderSlot>,
}

impl Dashboard {
    pub(crate) fn new(dataset: Dataset, view: ViewState) -> Self {
        let dates = available_dates(&dataset);
        Self {
            dataset,
            dates,
            view,
            projection: ChartProjection::default(),
            slots: Vec::new(),
        }
    }

    pub(crate) fn with_surface(mut self, slot: RenderSlot) -> Self {
        self.slots.push(slot);
        self
    }

    pub(crate) fn view(&self) -> &ViewState {
        &self.view
    }

    pub(crate) fn projection(&self) -> &ChartProjection {
        &self.projection
    }

    /// Dates offered by the date selector
    pub(crate) fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    /// Recompute the projection and hand it to every surface.
    /// A surface that fails is reported and skipped for this pass.
    pub(crate) fn refresh(&mut self) -> RefreshOutcome {
        self.projection = project(&self.dataset, &self.view);

        let mut failed = 0;
        for slot in &mut self.slots {
            match slot.render(&self.projection, self.view.chart_kind) {
                Ok(handle) => debug_assert_eq!(handle.points, self.projection.len()),
                Err(e) => {
                    print_error(&format!("{}: {}", slot.name(), e));
                    failed += 1;
                }
            }
        }

        RefreshOutcome {
            points: self.projection.len(),
            failed,
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) -> RefreshOutcome {
        self.view.mode = mode;
        self.refresh()
    }

    pub(crate) fn set_chart_kind(&mut self, kind: ChartKind) -> RefreshOutcome {
        self.view.chart_kind = kind;
        self.refresh()
    }

    /// Dates outside the selector options are accepted and render an empty chart
    pub(crate) fn set_date(&mut self, date: NaiveDate) -> RefreshOutcome {
        if !self.dates.contains(&date) {
            print_warning(&format!("no day-wise readings for {}", date));
        }
        self.view.selected_date = date;
        self.refresh()
    }

    /// Release every live rendering
    pub(crate) fn teardown(&mut self) {
        for slot in &mut self.slots {
            slot.clear();
            debug_assert!(slot.live().is_none());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::{ChartSurface, RenderError, RenderHandle};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Records what each draw received
    struct Probe {
        draws: Rc<RefCell<Vec<(ChartProjection, ChartKind)>>>,
        live: Rc<RefCell<bool>>,
    }

    impl ChartSurface for Probe {
        fn name(&self) -> String {
            "probe".to_string()
        }

        fn draw(
            &mut self,
            projection: &ChartProjection,
            kind: ChartKind,
        ) -> Result<RenderHandle, RenderError> {
            assert!(!*self.live.borrow(), "previous rendering still live");
            *self.live.borrow_mut() = true;
            let mut draws = self.draws.borrow_mut();
            draws.push((projection.clone(), kind));
            Ok(RenderHandle {
                id: draws.len() as u64,
                points: projection.len(),
            })
        }

        fn release(&mut self, _handle: RenderHandle) {
            *self.live.borrow_mut() = false;
        }
    }

    /// Always unavailable, like a missing drawing context
    struct Unavailable;

    impl ChartSurface for Unavailable {
        fn name(&self) -> String {
            "unavailable".to_string()
        }

        fn draw(
            &mut self,
            _projection: &ChartProjection,
            _kind: ChartKind,
        ) -> Result<RenderHandle, RenderError> {
            Err(RenderError::SurfaceUnavailable("no context".to_string()))
        }

        fn release(&mut self, _handle: RenderHandle) {}
    }

    fn date(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    fn initial_view() -> ViewState {
        ViewState {
            mode: Mode::DayWise,
            chart_kind: ChartKind::Bar,
            selected_date: date("2024-10-25"),
        }
    }

    type Draws = Rc<RefCell<Vec<(ChartProjection, ChartKind)>>>;

    fn dashboard() -> (Dashboard, Draws, Rc<RefCell<bool>>) {
        let draws = Rc::new(RefCell::new(Vec::new()));
        let live = Rc::new(RefCell::new(false));
        let probe = Probe {
            draws: draws.clone(),
            live: live.clone(),
        };
        let dash = Dashboard::new(Dataset::sample().unwrap(), initial_view())
            .with_surface(RenderSlot::new(probe));
        (dash, draws, live)
    }

    #[test]
    fn test_each_change_renders_once() {
        let (mut dash, draws, _) = dashboard();

        dash.refresh();
        dash.set_mode(Mode::HourWise);
        dash.set_chart_kind(ChartKind::Line);
        dash.set_date(date("2024-10-30"));

        assert_eq!(draws.borrow().len(), 4);
        let (last, kind) = draws.borrow().last().cloned().unwrap();
        assert_eq!(kind, ChartKind::Line);
        assert_eq!(last.chart_title, "Watt-Hours on 2024-10-30");
        assert_eq!(last.labels, vec!["5:00 AM", "10:00 AM", "1:00 PM", "5:00 PM"]);
    }

    #[test]
    fn test_chart_kind_switch_keeps_data() {
        let (mut dash, draws, _) = dashboard();

        dash.set_mode(Mode::HourWise);
        dash.set_chart_kind(ChartKind::Line);

        let draws = draws.borrow();
        assert_eq!(draws[0].0, draws[1].0);
        assert_eq!(draws[0].1, ChartKind::Bar);
        assert_eq!(draws[1].1, ChartKind::Line);
    }

    #[test]
    fn test_unknown_date_renders_empty() {
        let (mut dash, _, _) = dashboard();
        dash.set_mode(Mode::HourWise);

        let outcome = dash.set_date(date("2025-01-01"));
        assert_eq!(outcome.points, 0);
        assert_eq!(outcome.failed, 0);
        assert!(dash.projection().is_empty());
        assert_eq!(dash.view().selected_date, date("2025-01-01"));
    }

    #[test]
    fn test_failed_surface_is_skipped() {
        let draws = Rc::new(RefCell::new(Vec::new()));
        let probe = Probe {
            draws: draws.clone(),
            live: Rc::new(RefCell::new(false)),
        };
        let mut dash = Dashboard::new(Dataset::sample().unwrap(), initial_view())
            .with_surface(RenderSlot::new(Unavailable))
            .with_surface(RenderSlot::new(probe));

        let outcome = dash.refresh();
        assert_eq!(outcome.failed, 1);
        assert_eq!(outcome.points, 12);
        assert_eq!(draws.borrow().len(), 1);
    }

    #[test]
    fn test_teardown_releases() {
        let (mut dash, _, live) = dashboard();
        dash.refresh();
        assert!(*live.borrow());
        dash.teardown();
        assert!(!*live.borrow());
    }

    #[test]
    fn test_dates_match_selector() {
        let (dash, _, _) = dashboard();
        assert_eq!(dash.dates().len(), 12);
        assert_eq!(dash.dates()[0], date("2024-10-20"));
    }
}
