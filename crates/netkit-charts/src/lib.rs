// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Chart data builders (C11): pure transformers from domain/analysis
//! values to chart value objects. No rendering happens here — only the
//! validated value objects a renderer would consume.

pub mod categorical;
pub mod channel_diagram;
pub mod color;
pub mod graph;
pub mod heatmap;
pub mod series;

pub use categorical::{BarChartData, BoxPlotData, PieChartData, PieSlice, ScatterPlotData};
pub use channel_diagram::{ChannelDiagramData, ChannelOccupancy};
pub use color::{ColorScheme, HexColor};
pub use graph::GraphData;
pub use heatmap::HeatmapData;
pub use series::{AreaChartData, LineChartData, MultiSeriesChartData, Point};
