use crate::analysis::{AnalysisPayload, Series};
use crate::errors::AppError;
use serde_json::{json, Value};

const ACCENT: &str = "#64ffda";
const GRID: &str = "rgba(100,255,218,0.1)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartKind {
    Line,
    Bar,
    Pie,
    Doughnut,
}

impl ChartKind {
    pub const ALL: [ChartKind; 4] = [
        ChartKind::Line,
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Doughnut,
    ];

    pub fn js_type(self) -> &'static str {
        match self {
            ChartKind::Line => "line",
            ChartKind::Bar => "bar",
            ChartKind::Pie => "pie",
            ChartKind::Doughnut => "doughnut",
        }
    }

    pub fn canvas_id(self) -> &'static str {
        match self {
            ChartKind::Line => "lineChart",
            ChartKind::Bar => "barChart",
            ChartKind::Pie => "pieChart",
            ChartKind::Doughnut => "doughnutChart",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Line => "Spending Over Time",
            ChartKind::Bar => "By Category",
            ChartKind::Pie => "Category Share",
            ChartKind::Doughnut => "Category Mix",
        }
    }

    fn index(self) -> usize {
        self as usize
    }

    pub fn series(self, payload: &AnalysisPayload) -> &Series {
        match self {
            ChartKind::Line => &payload.line_chart,
            _ => &payload.category_charts,
        }
    }
}

pub fn chart_config(kind: ChartKind, series: &Series, currency_symbol: &str) -> Value {
    let data = match kind {
        ChartKind::Line => json!({
            "labels": series.labels,
            "datasets": [{
                "label": format!("Total Expenses ({})", currency_symbol),
                "data": series.amounts,
                "borderColor": ACCENT,
                "backgroundColor": "rgba(100, 255, 218, 0.15)",
                "fill": true,
                "tension": 0.25,
                "borderWidth": 2,
                "pointBackgroundColor": ACCENT,
                "pointRadius": 4,
            }],
        }),
        ChartKind::Bar => json!({
            "labels": series.labels,
            "datasets": [{
                "label": format!("Category-wise Expenses ({})", currency_symbol),
                "data": series.amounts,
                "backgroundColor": [ACCENT, "#00bcd4", "#0097a7", "#26c6da", "#4dd0e1"],
            }],
        }),
        ChartKind::Pie => json!({
            "labels": series.labels,
            "datasets": [{
                "data": series.amounts,
                "backgroundColor": [ACCENT, "#00acc1", "#00838f", "#4dd0e1"],
            }],
        }),
        ChartKind::Doughnut => json!({
            "labels": series.labels,
            "datasets": [{
                "data": series.amounts,
                "backgroundColor": [ACCENT, "#00bcd4", "#00838f", "#4dd0e1"],
            }],
        }),
    };

    let mut config = json!({ "type": kind.js_type(), "data": data });
    if kind == ChartKind::Line {
        config["options"] = json!({
            "plugins": {
                "legend": { "labels": { "color": ACCENT, "font": { "size": 14 } } },
            },
            "scales": {
                "x": { "ticks": { "color": ACCENT }, "grid": { "color": GRID } },
                "y": { "ticks": { "color": ACCENT }, "grid": { "color": GRID } },
            },
        });
    }
    config
}

pub trait ChartHandle {
    fn destroy(&self);
}

pub struct ChartSet<H: ChartHandle> {
    slots: [Option<H>; 4],
}

impl<H: ChartHandle> Default for ChartSet<H> {
    fn default() -> Self {
        Self {
            slots: [None, None, None, None],
        }
    }
}

impl<H: ChartHandle> ChartSet<H> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, kind: ChartKind) -> Option<&H> {
        self.slots[kind.index()].as_ref()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destroys the current chart of `kind`, then installs whatever `create` builds.
    pub fn replace<F>(&mut self, kind: ChartKind, create: F) -> Result<(), AppError>
    where
        F: FnOnce() -> Result<H, AppError>,
    {
        if let Some(old) = self.slots[kind.index()].take() {
            old.destroy();
        }
        self.slots[kind.index()] = Some(create()?);
        Ok(())
    }

    // Every kind is redrawn even after a failure, so no old chart outlives the call.
    pub fn replace_all<F>(&mut self, mut create: F) -> Result<(), AppError>
    where
        F: FnMut(ChartKind) -> Result<H, AppError>,
    {
        let mut first_err = None;
        for kind in ChartKind::ALL {
            if let Err(err) = self.replace(kind, || create(kind)) {
                log::warn!("{} chart failed: {}", kind.js_type(), err);
                first_err.get_or_insert(err);
            }
        }
        match first_err {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            if let Some(chart) = slot.take() {
                chart.destroy();
            }
        }
    }
}

pub mod chart_js {
    use super::{chart_config, ChartHandle, ChartKind};
    use crate::analysis::AnalysisPayload;
    use crate::errors::AppError;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;

    #[wasm_bindgen]
    extern "C" {
        pub type Chart;

        #[wasm_bindgen(constructor, catch)]
        fn new(target: &web_sys::HtmlCanvasElement, config: &JsValue) -> Result<Chart, JsValue>;

        #[wasm_bindgen(method, js_name = destroy)]
        fn destroy_js(this: &Chart);
    }

    impl ChartHandle for Chart {
        fn destroy(&self) {
            self.destroy_js();
        }
    }

    pub fn create(
        kind: ChartKind,
        payload: &AnalysisPayload,
        currency_symbol: &str,
    ) -> Result<Chart, AppError> {
        let canvas = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.get_element_by_id(kind.canvas_id()))
            .and_then(|element| element.dyn_into::<web_sys::HtmlCanvasElement>().ok())
            .ok_or_else(|| AppError::Chart(format!("canvas `{}` not found", kind.canvas_id())))?;

        let config = chart_config(kind, kind.series(payload), currency_symbol);
        let config = js_sys::JSON::parse(&config.to_string())
            .map_err(|err| AppError::Chart(format!("{:?}", err)))?;

        Chart::new(&canvas, &config).map_err(|err| AppError::Chart(format!("{:?}", err)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    type Events = Rc<RefCell<Vec<String>>>;

    struct FakeChart {
        name: String,
        events: Events,
    }

    impl ChartHandle for FakeChart {
        fn destroy(&self) {
            self.events.borrow_mut().push(format!("destroy {}", self.name));
        }
    }

    fn build(events: &Events, name: &str) -> Result<FakeChart, AppError> {
        events.borrow_mut().push(format!("create {}", name));
        Ok(FakeChart {
            name: name.to_string(),
            events: events.clone(),
        })
    }

    #[test]
    fn replace_destroys_before_create() {
        let events = Events::default();
        let mut charts = ChartSet::new();
        charts.replace(ChartKind::Line, || build(&events, "line-1")).unwrap();
        charts.replace(ChartKind::Line, || build(&events, "line-2")).unwrap();

        assert_eq!(
            *events.borrow(),
            vec!["create line-1", "destroy line-1", "create line-2"]
        );
        assert_eq!(charts.len(), 1);
        assert_eq!(charts.get(ChartKind::Line).unwrap().name, "line-2");
    }

    #[test]
    fn replace_all_keeps_one_chart_per_kind() {
        let events = Events::default();
        let mut charts = ChartSet::new();
        for round in 0..3 {
            charts
                .replace_all(|kind| build(&events, &format!("{}-{}", kind.js_type(), round)))
                .unwrap();
        }

        assert_eq!(charts.len(), 4);
        let destroyed = events
            .borrow()
            .iter()
            .filter(|event| event.starts_with("destroy"))
            .count();
        assert_eq!(destroyed, 8);
        assert_eq!(charts.get(ChartKind::Pie).unwrap().name, "pie-2");
    }

    #[test]
    fn failed_create_leaves_slot_empty() {
        let events = Events::default();
        let mut charts = ChartSet::new();
        charts.replace(ChartKind::Bar, || build(&events, "bar")).unwrap();

        let result = charts.replace(ChartKind::Bar, || Err(AppError::Chart("boom".to_string())));
        assert!(result.is_err());
        assert!(charts.get(ChartKind::Bar).is_none());
        assert_eq!(events.borrow().last().unwrap(), "destroy bar");
    }

    #[test]
    fn one_failed_kind_does_not_leave_older_charts_behind() {
        let events = Events::default();
        let mut charts = ChartSet::new();
        charts.replace_all(|kind| build(&events, &format!("{}-old", kind.js_type()))).unwrap();

        let result = charts.replace_all(|kind| match kind {
            ChartKind::Bar => Err(AppError::Chart("bad bar".to_string())),
            ChartKind::Pie => Err(AppError::Chart("bad pie".to_string())),
            _ => build(&events, &format!("{}-new", kind.js_type())),
        });

        match result {
            Err(AppError::Chart(message)) => assert_eq!(message, "bad bar"),
            other => panic!("expected the first chart error, got {:?}", other),
        }
        assert!(charts.get(ChartKind::Bar).is_none());
        assert!(charts.get(ChartKind::Pie).is_none());
        assert_eq!(charts.get(ChartKind::Line).unwrap().name, "line-new");
        assert_eq!(charts.get(ChartKind::Doughnut).unwrap().name, "doughnut-new");
        let destroyed = events
            .borrow()
            .iter()
            .filter(|event| event.starts_with("destroy"))
            .count();
        assert_eq!(destroyed, 4);
    }

    #[test]
    fn clear_destroys_everything() {
        let events = Events::default();
        let mut charts = ChartSet::new();
        charts.replace_all(|kind| build(&events, kind.js_type())).unwrap();
        charts.clear();

        assert!(charts.is_empty());
        assert_eq!(events.borrow().len(), 8);
    }

    #[test]
    fn canvases_are_distinct() {
        let mut ids: Vec<&str> = ChartKind::ALL.iter().map(|kind| kind.canvas_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn line_config_uses_time_series() {
        let payload = AnalysisPayload {
            line_chart: Series {
                labels: vec!["2024-01-01".to_string()],
                amounts: vec![150.0],
            },
            category_charts: Series::placeholder(),
        };
        let config = chart_config(ChartKind::Line, ChartKind::Line.series(&payload), "₹");

        assert_eq!(config["type"], "line");
        assert_eq!(config["data"]["labels"][0], "2024-01-01");
        assert_eq!(config["data"]["datasets"][0]["data"][0], 150.0);
        assert_eq!(config["data"]["datasets"][0]["label"], "Total Expenses (₹)");
        assert_eq!(config["options"]["scales"]["x"]["ticks"]["color"], ACCENT);
    }

    #[test]
    fn category_charts_use_category_series() {
        let payload = AnalysisPayload {
            line_chart: Series::placeholder(),
            category_charts: Series {
                labels: vec!["Food".to_string(), "Travel".to_string()],
                amounts: vec![10.0, 5.0],
            },
        };
        for kind in [ChartKind::Bar, ChartKind::Pie, ChartKind::Doughnut] {
            let config = chart_config(kind, kind.series(&payload), "$");
            assert_eq!(config["type"], kind.js_type());
            assert_eq!(config["data"]["labels"][1], "Travel");
            assert!(config.get("options").is_none());
        }
    }
}
