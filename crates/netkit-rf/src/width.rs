// Copyright 2026 The NetKit Authors. All rights reserved.
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use netkit_model::{Band, ChannelWidth};

use crate::constraints::ChannelPlanningConstraints;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidthRecommendation {
    pub width: ChannelWidth,
    pub expected_throughput_improvement_pct: f64,
}

/// Recommends a channel width for `current_channel` on `band`, given
/// observed `utilization_pct` and `neighbor_count`.
pub fn optimize_width(
    current_width: ChannelWidth,
    band: Band,
    utilization_pct: f64,
    neighbor_count: usize,
    constraints: &ChannelPlanningConstraints,
) -> WidthRecommendation {
    let recommended = if band.is_2_4ghz() {
        if utilization_pct < 30.0 && constraints.allows_40mhz_in_2_4ghz {
            ChannelWidth::Mhz40
        } else {
            ChannelWidth::Mhz20
        }
    } else if utilization_pct < 20.0 && neighbor_count < 3 {
        widest_available(band, constraints)
    } else if utilization_pct < 40.0 && neighbor_count < 6 {
        ChannelWidth::Mhz80.min(widest_available(band, constraints))
    } else if utilization_pct < 60.0 {
        ChannelWidth::Mhz40
    } else {
        ChannelWidth::Mhz20
    };

    let ratio = recommended.ratio_to(current_width);
    let improvement = (ratio - 1.0) * 100.0 * (1.0 - utilization_pct / 100.0);

    WidthRecommendation { width: recommended, expected_throughput_improvement_pct: improvement }
}

fn widest_available(band: Band, constraints: &ChannelPlanningConstraints) -> ChannelWidth {
    if !constraints.preferred_widths.is_empty() {
        return constraints.preferred_widths.iter().copied().max().unwrap_or_else(|| band.width_catalog()[0]);
    }
    *band.width_catalog().last().unwrap_or(&ChannelWidth::Mhz20)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_utilization_2_4ghz_recommends_40mhz_when_allowed() {
        let constraints = ChannelPlanningConstraints { allows_40mhz_in_2_4ghz: true, ..Default::default() };
        let rec = optimize_width(ChannelWidth::Mhz20, Band::Band2_4GHz, 10.0, 0, &constraints);
        assert_eq!(rec.width, ChannelWidth::Mhz40);
    }

    #[test]
    fn low_utilization_2_4ghz_stays_20mhz_when_not_allowed() {
        let constraints = ChannelPlanningConstraints::default();
        let rec = optimize_width(ChannelWidth::Mhz20, Band::Band2_4GHz, 10.0, 0, &constraints);
        assert_eq!(rec.width, ChannelWidth::Mhz20);
    }

    #[test]
    fn quiet_5ghz_recommends_widest() {
        let constraints = ChannelPlanningConstraints::default();
        let rec = optimize_width(ChannelWidth::Mhz20, Band::Band5GHz, 5.0, 1, &constraints);
        assert_eq!(rec.width, ChannelWidth::Mhz160);
    }

    #[test]
    fn congested_5ghz_recommends_20mhz() {
        let constraints = ChannelPlanningConstraints::default();
        let rec = optimize_width(ChannelWidth::Mhz80, Band::Band5GHz, 80.0, 10, &constraints);
        assert_eq!(rec.width, ChannelWidth::Mhz20);
    }
}
