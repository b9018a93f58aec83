//! Integration tests for the aggregation pipeline.

use approx::assert_relative_eq;
use rstest::{fixture, rstest};
use sfhousing_analysis::neighborhood::{COST_TYPE, VALUE};
use sfhousing_analysis::{AggregationPipeline, Analysis};
use sfhousing_data::loader::{read_housing, read_locations};
use sfhousing_data::{DataContext, HousingRecord};
use std::collections::{BTreeMap, HashMap, HashSet};

const HOUSING_CSV: &str = "\
year,neighborhood,sale_price_sqr_foot,housing_units,gross_rent
2010,Alamo Square,291.18,372560,1239
2010,Anza Vista,267.93,372560,1239
2010,Bayview,170.10,372560,1239
2010,Pacific Heights,496.52,372560,1239
2011,Alamo Square,272.53,374507,1530
2011,Anza Vista,,374507,1530
2011,Bayview,150.00,374507,1530
2011,Pacific Heights,600.10,374507,1530
2011,Pacific Heights,400.00,374507,1530
2012,Alamo Square,183.10,376454,2324
2012,Bayview,194.02,376454,2324
2012,Pacific Heights,689.55,376454,2324
";

const LOCATIONS_CSV: &str = "\
Neighborhood,Lat,Lon
Alamo Square,37.791012,-122.4021
Anza Vista ,37.779598,-122.443451
Bayview,37.73467,-122.40106
Presidio,37.79298,-122.4616
";

#[fixture]
fn ctx() -> DataContext {
    let records = read_housing(HOUSING_CSV.as_bytes()).unwrap();
    let locations = read_locations(LOCATIONS_CSV.as_bytes()).unwrap();
    DataContext::new(records, Some(locations)).unwrap()
}

fn raw_records() -> Vec<HousingRecord> {
    read_housing(HOUSING_CSV.as_bytes()).unwrap()
}

#[rstest]
fn test_yearly_housing_units_one_row_per_year(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let table = pipeline.yearly_housing_units().unwrap();

    let years: Vec<i32> = table
        .i32_values("year")
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert_eq!(years, ctx.years());

    let mut sums: BTreeMap<i32, (f64, usize)> = BTreeMap::new();
    for record in raw_records() {
        let entry = sums.entry(record.year).or_default();
        entry.0 += record.housing_units.unwrap();
        entry.1 += 1;
    }
    let units = table.f64_values("housing_units").unwrap();
    for (value, (_, (sum, count))) in units.iter().zip(sums) {
        assert_relative_eq!(value.unwrap(), sum / count as f64);
    }
    assert!(table.display_range().is_some());
}

#[rstest]
#[case("Alamo Square", vec![(2010, 291.18), (2011, 272.53), (2012, 183.10)])]
#[case("Pacific Heights", vec![(2010, 496.52), (2011, 500.10), (2012, 689.55)])]
#[case("Anza Vista", vec![(2010, 267.93)])]
fn test_price_by_neighborhood(
    ctx: DataContext,
    #[case] name: &str,
    #[case] expected: Vec<(i32, f64)>,
) {
    let pipeline = AggregationPipeline::new(&ctx);
    let table = pipeline.price_by_neighborhood(name).unwrap();

    let years = table.i32_values("year").unwrap();
    let prices = table.f64_values("sale_price_sqr_foot").unwrap();

    // Anza Vista 2011 has a record but no price: the year stays, the mean is null
    let actual: Vec<(i32, f64)> = years
        .into_iter()
        .zip(prices)
        .filter_map(|(y, p)| Some((y?, p?)))
        .collect();
    assert_eq!(actual.len(), expected.len());
    for ((year, price), (exp_year, exp_price)) in actual.iter().zip(&expected) {
        assert_eq!(year, exp_year);
        assert_relative_eq!(*price, *exp_price, epsilon = 1e-9);
    }
}

#[rstest]
#[case("Nob Hill")]
#[case("alamo square")]
#[case("")]
fn test_price_by_unknown_neighborhood_is_empty(ctx: DataContext, #[case] name: &str) {
    let pipeline = AggregationPipeline::new(&ctx);
    assert!(pipeline.price_by_neighborhood(name).unwrap().is_empty());
    assert!(pipeline.cost_comparison(name).unwrap().is_empty());
}

#[rstest]
fn test_top_k_never_excludes_a_larger_neighborhood(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let all = pipeline.top_k_neighborhoods_by_sale_price(10).unwrap();
    let top = pipeline.top_k_neighborhoods_by_sale_price(2).unwrap();

    assert!(all.height() <= 10);
    assert_eq!(top.height(), 2);

    let top_prices: Vec<f64> = top
        .f64_values("sale_price_sqr_foot")
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    assert!(top_prices.windows(2).all(|w| w[0] >= w[1]));

    let top_names: HashSet<String> = top
        .str_values("neighborhood")
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    let lowest_kept = top_prices.iter().copied().fold(f64::INFINITY, f64::min);

    let names = all.str_values("neighborhood").unwrap();
    let prices = all.f64_values("sale_price_sqr_foot").unwrap();
    for (name, price) in names.into_iter().zip(prices) {
        let (name, price) = (name.unwrap(), price.unwrap());
        if !top_names.contains(&name) {
            assert!(price <= lowest_kept, "{} excluded with {}", name, price);
        }
    }
}

#[rstest]
fn test_top_k_weights_years_equally(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let table = pipeline.top_k_neighborhoods_by_sale_price(1).unwrap();

    assert_eq!(
        table.str_values("neighborhood").unwrap()[0].as_deref(),
        Some("Pacific Heights")
    );
    // yearly means 496.52, 500.10, 689.55
    let expected = (496.52 + 500.10 + 689.55) / 3.0;
    assert_relative_eq!(
        table.f64_values("sale_price_sqr_foot").unwrap()[0].unwrap(),
        expected,
        epsilon = 1e-9
    );
}

#[rstest]
fn test_cost_comparison_recombines_to_wide(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let long = pipeline.cost_comparison("Pacific Heights").unwrap();

    let years = long.i32_values("year").unwrap();
    let kinds = long.str_values(COST_TYPE).unwrap();
    let values = long.f64_values(VALUE).unwrap();

    let records = raw_records();
    let wide: Vec<&HousingRecord> = records
        .iter()
        .filter(|r| r.neighborhood == "Pacific Heights")
        .collect();
    assert_eq!(long.height(), wide.len() * 2);

    let mut by_kind: HashMap<String, Vec<(i32, Option<f64>)>> = HashMap::new();
    for ((year, kind), value) in years.into_iter().zip(kinds).zip(values) {
        by_kind
            .entry(kind.unwrap())
            .or_default()
            .push((year.unwrap(), value));
    }

    let sales: Vec<(i32, Option<f64>)> =
        wide.iter().map(|r| (r.year, r.sale_price_sqr_foot)).collect();
    let rents: Vec<(i32, Option<f64>)> = wide.iter().map(|r| (r.year, r.gross_rent)).collect();
    assert_eq!(by_kind["sale_price_sqr_foot"], sales);
    assert_eq!(by_kind["gross_rent"], rents);
}

#[rstest]
fn test_map_data_is_outer_join(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let means = pipeline.neighborhood_means().unwrap();
    let map = pipeline.neighborhood_map_data().unwrap();

    let mut expected: HashSet<String> = means
        .str_values("neighborhood")
        .unwrap()
        .into_iter()
        .flatten()
        .map(|n| n.trim().to_string())
        .collect();
    expected.extend(
        ["Alamo Square", "Anza Vista", "Bayview", "Presidio"]
            .iter()
            .map(|n| n.to_string()),
    );

    let names: Vec<String> = map
        .str_values("neighborhood")
        .unwrap()
        .into_iter()
        .flatten()
        .collect();
    let unique: HashSet<String> = names.iter().cloned().collect();

    assert_eq!(names.len(), unique.len());
    assert_eq!(unique, expected);
}

#[rstest]
fn test_neighborhood_means_drop_incomplete(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let means = pipeline.neighborhood_means().unwrap();

    // Every neighborhood has at least one sale price, so none are dropped
    assert_eq!(means.height(), ctx.neighborhoods().len());
    for column in means.column_names().iter().skip(1) {
        assert!(means.f64_values(column).unwrap().iter().all(Option::is_some));
    }
}

#[rstest]
fn test_sunburst_hierarchy(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);
    let table = pipeline.run(Analysis::Sunburst, None).unwrap();

    let years = table.i32_values("year").unwrap();
    let mut per_year: BTreeMap<i32, usize> = BTreeMap::new();
    for year in years.into_iter().flatten() {
        *per_year.entry(year).or_default() += 1;
    }
    assert!(per_year.values().all(|&n| n <= 7));
    // Anza Vista has no 2011 price, so 2011 keeps three neighborhoods
    assert_eq!(per_year.get(&2011), Some(&3));
}

#[rstest]
fn test_parallel_views(ctx: DataContext) {
    let pipeline = AggregationPipeline::new(&ctx);

    let categories = pipeline.run(Analysis::ParallelCategories, None).unwrap();
    assert!(categories.height() <= 10);
    assert_eq!(
        categories.str_values("neighborhood").unwrap()[0].as_deref(),
        Some("Pacific Heights")
    );

    // Pacific Heights has no coordinates; Anza Vista's rows with a null
    // price are dropped before averaging
    let coordinates = pipeline.run(Analysis::ParallelCoordinates, None).unwrap();
    assert_eq!(
        coordinates.str_values("neighborhood").unwrap(),
        vec![
            Some("Alamo Square".to_string()),
            Some("Anza Vista".to_string()),
            Some("Bayview".to_string())
        ]
    );
}
