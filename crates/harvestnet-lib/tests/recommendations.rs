mod common;

use std::collections::BTreeMap;

use common::LogisticsRecordBuilder;
use harvestnet_lib::{
    analyze_distribution_network, generate_recommendations, safety_stock_recommendation,
    ClusteringConfig, FacilityLocation, InventoryOptimization, InventoryPolicy, ItemResult,
    RecommendationThresholds, CAPACITY_RECOMMENDATIONS, RELIABILITY_RECOMMENDATIONS,
};

fn facilities(total: usize, late: usize, load: f64) -> Vec<FacilityLocation> {
    (0..total)
        .map(|index| {
            let builder = LogisticsRecordBuilder::new("A", "B").load(load, 100.0);
            if index < late {
                builder.late().facility()
            } else {
                builder.facility()
            }
        })
        .collect()
}

fn policy(safety_stock: f64, max_inventory: f64) -> ItemResult<InventoryPolicy> {
    ItemResult::Ok(InventoryPolicy {
        safety_stock,
        eoq: max_inventory - safety_stock,
        reorder_point: safety_stock,
        max_inventory,
    })
}

#[test]
fn low_reliability_emits_three_logistics_lines_once() {
    let analysis = analyze_distribution_network(
        &facilities(20, 3, 90.0),
        &ClusteringConfig::default(),
    )
    .expect("analysis");
    assert_eq!(analysis.network_efficiency.delivery_reliability, 0.85);

    let recommendations = generate_recommendations(
        &InventoryOptimization::default(),
        Some(&analysis),
        &RecommendationThresholds::default(),
    );
    assert_eq!(recommendations, RELIABILITY_RECOMMENDATIONS.to_vec());
}

#[test]
fn only_overstocked_warehouse_is_named() {
    let inventory = InventoryOptimization {
        warehouse_stats: BTreeMap::new(),
        optimal_inventory: BTreeMap::from([
            ("W1".to_string(), policy(50.0, 100.0)),
            ("W2".to_string(), policy(20.0, 100.0)),
        ]),
    };
    let recommendations =
        generate_recommendations(&inventory, None, &RecommendationThresholds::default());
    assert_eq!(recommendations, vec![safety_stock_recommendation("W1")]);
    assert!(recommendations[0].contains("W1"));
}

#[test]
fn rule_blocks_keep_fixed_order() {
    let analysis = analyze_distribution_network(
        &facilities(10, 5, 20.0),
        &ClusteringConfig::default(),
    )
    .expect("analysis");
    let inventory = InventoryOptimization {
        warehouse_stats: BTreeMap::new(),
        optimal_inventory: BTreeMap::from([
            ("North".to_string(), policy(80.0, 100.0)),
            ("East".to_string(), policy(45.0, 100.0)),
            ("Broken".to_string(), ItemResult::Failed {
                error: "holding cost is zero".to_string(),
            }),
        ]),
    };

    let recommendations = generate_recommendations(
        &inventory,
        Some(&analysis),
        &RecommendationThresholds::default(),
    );

    let mut expected: Vec<String> = RELIABILITY_RECOMMENDATIONS
        .iter()
        .map(|s| s.to_string())
        .collect();
    expected.push(safety_stock_recommendation("East"));
    expected.push(safety_stock_recommendation("North"));
    expected.extend(CAPACITY_RECOMMENDATIONS.iter().map(|s| s.to_string()));
    assert_eq!(recommendations, expected);
}

#[test]
fn undefined_capacity_metric_does_not_fire() {
    let analysis = analyze_distribution_network(
        &facilities(5, 0, 0.0)
            .into_iter()
            .map(|mut f| {
                f.transport_capacity = 0.0;
                f
            })
            .collect::<Vec<_>>(),
        &ClusteringConfig::default(),
    )
    .expect("analysis");
    let recommendations = generate_recommendations(
        &InventoryOptimization::default(),
        Some(&analysis),
        &RecommendationThresholds::default(),
    );
    assert!(recommendations.is_empty());
}
