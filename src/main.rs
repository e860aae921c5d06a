//! Command line front-end printing one page of the product catalog.
//!
//! Usage: `storefront-catalog [--search TEXT] [--category NAME] [--sort asc|desc]
//! [--page N] [--admin]`

use std::process::ExitCode;

use dotenvy::dotenv;
use log::error;

use storefront_catalog::domain::product::Product;
use storefront_catalog::dto::catalog::{CatalogPageData, CatalogQuery};
use storefront_catalog::models::config::AppConfig;
use storefront_catalog::repository::JsonFileRepository;
use storefront_catalog::services::session::SessionContext;
use storefront_catalog::services::{ServiceError, ServiceResult, admin, catalog};

struct CliArgs {
    query: CatalogQuery,
    admin: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<CliArgs, String> {
    let mut query = CatalogQuery::default();
    let mut admin = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value = |name: &str| args.next().ok_or_else(|| format!("missing value for {name}"));
        match arg.as_str() {
            "--search" => query.search = Some(value("--search")?),
            "--category" => query.category = Some(value("--category")?),
            "--sort" => query.sort = Some(value("--sort")?),
            "--page" => {
                let raw = value("--page")?;
                let page = raw
                    .parse::<usize>()
                    .map_err(|_| format!("invalid page number: {raw}"))?;
                query.page = Some(page);
            }
            "--admin" => admin = true,
            other => return Err(format!("unknown argument: {other}")),
        }
    }

    Ok(CliArgs { query, admin })
}

fn print_page(data: &CatalogPageData<'_>) {
    for product in &data.products.items {
        let product: &Product = product;
        println!(
            "{:<32} {:<16} ₹{}",
            product.name.as_str(),
            product.category.as_str(),
            product.price
        );
    }
    if data.products.items.is_empty() {
        println!("No products found.");
    }

    let pages: Vec<String> = data
        .products
        .pages
        .iter()
        .map(|page| match page {
            Some(number) if *number == data.products.page => format!("[{number}]"),
            Some(number) => number.to_string(),
            None => "…".to_string(),
        })
        .collect();
    println!(
        "page {} of {} ({} products): {}",
        data.products.page,
        data.products.total_pages,
        data.products.total_count,
        pages.join(" ")
    );
}

fn run(config: &AppConfig, args: CliArgs) -> ServiceResult<()> {
    let repo = JsonFileRepository::new(&config.products_path);

    let mut controller = if args.admin {
        let token = config
            .session_token
            .as_deref()
            .ok_or(ServiceError::Unauthorized)?;
        let user = SessionContext::new(&config.jwt_secret).authenticate(token)?;
        log::info!("Opening admin product table for {}", user.email);
        admin::load_admin_products(&repo, &user, config.admin_page_size)?
    } else {
        catalog::load_catalog(&repo, config.catalog_page_size)?
    };

    let data = catalog::apply_query(&mut controller, args.query)?;
    print_page(&data);
    Ok(())
}

fn main() -> ExitCode {
    dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match AppConfig::load("config/default.yaml") {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config, args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Failed to list products: {e}");
            ExitCode::FAILURE
        }
    }
}
