use super::annotations::translate_annotations;
use super::grouping::group_by_asset;
use super::refs::RefIdSession;
use crate::application::*;
use crate::error::MigrationError;
use crate::monitor::{MonitorWidget, MonitorWidgetType};
use std::collections::BTreeMap;

/// Everything about a converted widget except its geometry.
pub(crate) struct MappedWidget {
    pub widget_type: ApplicationWidgetType,
    pub properties: WidgetProperties,
}

/// Dispatches a widget to the conversion for its (already alias-resolved) variant.
pub(crate) fn map_widget(
    widget_index: usize,
    widget: &MonitorWidget,
    widget_type: &MonitorWidgetType,
    refs: &mut RefIdSession<'_>,
) -> Result<MappedWidget, MigrationError> {
    match widget_type {
        MonitorWidgetType::LineChart => xy_plot(widget_index, widget, ConnectionStyle::Linear),
        MonitorWidgetType::ScatterChart => {
            xy_plot(widget_index, widget, ConnectionStyle::Unconnected)
        }
        MonitorWidgetType::BarChart => bar_chart(widget_index, widget, refs),
        MonitorWidgetType::StatusTimeline
        | MonitorWidgetType::StatusGrid
        | MonitorWidgetType::Kpi
        | MonitorWidgetType::Table
        | MonitorWidgetType::Unrecognized(_) => Err(MigrationError::UnsupportedWidgetType {
            widget_index,
            widget_type: widget.widget_type.to_string(),
        }),
    }
}

fn xy_plot(
    widget_index: usize,
    widget: &MonitorWidget,
    connection_style: ConnectionStyle,
) -> Result<MappedWidget, MigrationError> {
    let properties = XyPlotProperties {
        title: widget.title.clone(),
        thresholds: translate_annotations(widget.annotations.as_ref()),
        symbol: SymbolSettings {
            style: SymbolStyle::FilledCircle,
        },
        axis: XyAxisSettings {
            y_visible: true,
            x_visible: true,
        },
        line: LineSettings {
            connection_style,
            style: LineStyle::Solid,
        },
        legend: LegendSettings { visible: true },
        query_config: query_config(widget_index, widget)?,
    };

    Ok(MappedWidget {
        widget_type: ApplicationWidgetType::XyPlot,
        properties: WidgetProperties::XyPlot(properties),
    })
}

fn bar_chart(
    widget_index: usize,
    widget: &MonitorWidget,
    refs: &mut RefIdSession<'_>,
) -> Result<MappedWidget, MigrationError> {
    let query_config = query_config(widget_index, widget)?;

    let mut style_settings = BTreeMap::new();
    for _ in &widget.metrics {
        style_settings.insert(refs.issue()?, SeriesStyle::default());
    }

    let properties = BarChartProperties {
        title: widget.title.clone(),
        thresholds: translate_annotations(widget.annotations.as_ref()),
        axis: BarAxisSettings {
            show_x: true,
            show_y: true,
        },
        query_config,
        style_settings,
    };

    Ok(MappedWidget {
        widget_type: ApplicationWidgetType::BarChart,
        properties: WidgetProperties::BarChart(properties),
    })
}

fn query_config(widget_index: usize, widget: &MonitorWidget) -> Result<QueryConfig, MigrationError> {
    Ok(QueryConfig {
        source: widget.metrics.first().map(|m| m.metric_type.clone()),
        query: Query {
            properties: Vec::new(),
            assets: group_by_asset(widget_index, &widget.metrics)?,
        },
    })
}
