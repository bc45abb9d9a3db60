// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::MetricsSettings;
use crate::domain::models::collection::Collection;
use crate::domain::services::reference_validator::ReferenceKind;
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::PrometheusBuilder;
use std::net::SocketAddr;
use tracing::info;

/// 初始化指标系统
///
/// 启用时安装 Prometheus 导出器；未安装记录器时计数调用为空操作。
pub fn init_metrics(settings: &MetricsSettings) {
    if !settings.enabled {
        info!("Metrics exporter disabled");
        return;
    }

    let addr: SocketAddr = match settings.listen.parse() {
        Ok(addr) => addr,
        Err(e) => {
            tracing::warn!("Invalid metrics address {}: {}", settings.listen, e);
            return;
        }
    };

    // Ignore error if address is already in use (for development/testing)
    if let Err(e) = PrometheusBuilder::new().with_http_listener(addr).install() {
        tracing::warn!("Failed to install Prometheus recorder: {}. This might happen if the port is already in use.", e);
        return;
    }

    describe_counter!(
        "records_created_total",
        "Total number of records persisted, by collection"
    );
    describe_counter!(
        "reference_rejections_total",
        "Total number of creations rejected because a referenced record was missing"
    );

    info!("Metrics exporter listening on {}", addr);
}

/// 记录一次成功写入
pub fn record_created(collection: Collection) {
    counter!("records_created_total", "collection" => collection.name()).increment(1);
}

/// 记录一次引用缺失导致的拒绝
pub fn reference_rejected(kind: ReferenceKind) {
    counter!("reference_rejections_total", "kind" => kind.as_str()).increment(1);
}
