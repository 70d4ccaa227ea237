//! `campin`: search free campsites from the command line.

use anyhow::Context;
use backend::{HttpQueryAdapter, ServiceConfig};
use chrono::NaiveDate;
use clap::Parser;
use common::{
    camp_site::{CampSite, QualityLevel},
    park::Park,
    search_request::{GeocodedPlace, SearchRequest},
};
use frontend::{
    CampinApp,
    data_definitions::{filter_selection::FilterSelection, sort_spec::ParkSortField},
};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "campin", about = "Find parks and campsites that are free for a travel window")]
struct Cli {
    /// Arrival date, YYYY-MM-DD.
    #[arg(long)]
    start_date: NaiveDate,
    /// Departure date, YYYY-MM-DD.
    #[arg(long)]
    end_date: NaiveDate,
    /// Maximum drive time in hours; 0 means no limit.
    #[arg(long, default_value_t = 0.0)]
    drive_hours: f64,
    /// Where the drive starts, e.g. "Toronto, ON, Canada".
    #[arg(long)]
    from_place: Option<String>,
    /// Order the park list; repeat to toggle (parkName, freeSites, parentParkName, driveHours).
    #[arg(long = "order-by")]
    order_by: Vec<ParkSortField>,
    /// Also list the free campsites of this park.
    #[arg(long)]
    park: Option<String>,
    #[arg(long, default_value = "Poor")]
    privacy: QualityLevel,
    #[arg(long, default_value = "Poor")]
    quality: QualityLevel,
    /// Overrides SEARCH_SERVICE_URL.
    #[arg(long)]
    service_url: Option<String>,
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = ServiceConfig::from_env()?;
    if let Some(service_url) = &cli.service_url {
        config = ServiceConfig::new(service_url)?.with_timeout(config.timeout);
    }
    let request = SearchRequest::new(cli.start_date, cli.end_date, cli.drive_hours, cli.from_place.map(GeocodedPlace::new))?;

    let app = CampinApp::new(HttpQueryAdapter::new(config)?);
    app.search_parks(request).await.context("park search failed")?;
    for field in &cli.order_by {
        app.order_parks_by(*field);
    }
    print_parks(&app.parks().displayed());

    if let Some(park_name) = &cli.park {
        app.select_park(park_name).await.with_context(|| format!("campsite search for {park_name} failed"))?;
        let sites = app.filter_camp_sites(FilterSelection::new(cli.privacy, cli.quality));
        println!();
        print_camp_sites(park_name, app.camp_sites().all_sites().len(), &sites);
    }
    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn print_parks(parks: &[Park]) {
    if parks.is_empty() {
        println!("No parks with free sites.");
        return;
    }
    println!("{:<32} {:>10} {:>12}  {}", "Park", "Free sites", "Drive hours", "Parent park");
    for park in parks {
        let drive_hours = park.drive_hours.map(|h| format!("{h:.1}")).unwrap_or("-".to_string());
        println!(
            "{:<32} {:>10} {:>12}  {}",
            park.park_name,
            park.free_site_count,
            drive_hours,
            park.parent_park_name.as_deref().unwrap_or("")
        );
    }
}

fn print_camp_sites(park_name: &str, total: usize, sites: &[CampSite]) {
    println!("{} of {} free sites in {} match the filter", sites.len(), total, park_name);
    for site in sites {
        let privacy = site.privacy().map(|l| l.as_str()).unwrap_or("?");
        let quality = site.quality().map(|l| l.as_str()).unwrap_or("?");
        println!(
            "  {:<6} {:<28} privacy: {:<8} quality: {:<8} images: {}",
            site.site_number,
            site.campground_name.as_deref().unwrap_or(""),
            privacy,
            quality,
            site.images.len()
        );
    }
}
