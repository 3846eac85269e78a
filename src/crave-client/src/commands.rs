// SPDX-FileCopyrightText: 2026 Stan Grams <sjg@haxx.space>
//
// SPDX-License-Identifier: BSD-2-Clause

//! Subcommand handlers. Each one is a single sequential flow: gate on the
//! stored session before any authenticated fetch, validate before any
//! request leaves the process, and keep analytics strictly fire-and-forget.

use clap::{ArgGroup, Args};
use tracing::{info, warn};

use crave_core::analytics::{new_session_id, TrackEventRequest};
use crave_core::slug::MIN_SLUG_LEN;
use crave_core::{
    filter_recommendations, Creator, CuisineType, DishCategory, DynResult, LoginRequest, MealType,
    PriceRange, Recommendation,
};

use crate::analytics::AnalyticsSink;
use crate::api::{ApiClient, ApiError};
use crate::config::ClientConfig;
use crate::forms::{RecommendationForm, RegistrationForm};
use crate::session::{Session, SessionStore};

const LOGIN_HINT: &str = "Not signed in. Run `crave-client login` first.";

#[derive(Debug, Args)]
pub struct RegisterArgs {
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Password (min 8 characters)
    #[arg(long)]
    pub password: String,
    /// Password confirmation
    #[arg(long = "confirm-password")]
    pub confirm_password: String,
    /// Display name shown on the public page
    #[arg(long = "display-name")]
    pub display_name: String,
    /// Page URL slug (derived from the display name when omitted)
    #[arg(long)]
    pub slug: Option<String>,
    /// Instagram handle (without the @)
    #[arg(long)]
    pub instagram: Option<String>,
    /// Short bio
    #[arg(long)]
    pub bio: Option<String>,
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Email address
    #[arg(long)]
    pub email: String,
    /// Password
    #[arg(long)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Dish name
    #[arg(long)]
    pub dish: String,
    /// Restaurant name
    #[arg(long)]
    pub restaurant: String,
    /// Area / location
    #[arg(long)]
    pub area: Option<String>,
    /// Full street address
    #[arg(long)]
    pub address: Option<String>,
    /// Google Maps share link
    #[arg(long = "maps-url")]
    pub maps_url: Option<String>,
    /// Your quote / review
    #[arg(long)]
    pub quote: Option<String>,
    /// Detailed description
    #[arg(long)]
    pub description: Option<String>,
    /// Dish category (e.g. biryani, street-food)
    #[arg(long)]
    pub category: Option<DishCategory>,
    /// Cuisine type (e.g. north-indian, mughlai)
    #[arg(long)]
    pub cuisine: Option<CuisineType>,
    /// Meal type (e.g. breakfast, dinner)
    #[arg(long)]
    pub meal: Option<MealType>,
    /// Price range (budget, mid, premium, luxury)
    #[arg(long)]
    pub price: Option<PriceRange>,
    /// Comma-separated tags
    #[arg(long)]
    pub tags: Option<String>,
}

#[derive(Debug, Args)]
pub struct PageArgs {
    /// Page number (0-based)
    #[arg(long, default_value_t = 0)]
    pub page: u32,
    /// Page size (defaults to [api].page_size)
    #[arg(long)]
    pub size: Option<u32>,
}

#[derive(Debug, Args)]
pub struct ViewArgs {
    /// Creator page slug
    pub slug: String,
    /// Filter dishes, restaurants and areas
    #[arg(long, short = 'q')]
    pub query: Option<String>,
    #[command(flatten)]
    pub pagination: PageArgs,
}

#[derive(Debug, Args)]
#[command(group(ArgGroup::new("target").required(true)))]
pub struct OpenArgs {
    /// Creator page slug
    pub slug: String,
    /// Recommendation id
    pub id: i64,
    /// Resolve the Google Maps link
    #[arg(long, group = "target")]
    pub maps: bool,
    /// Resolve the Instagram link
    #[arg(long, group = "target")]
    pub instagram: bool,
}

pub async fn register(base_url: &str, args: RegisterArgs) -> DynResult<()> {
    let mut form = RegistrationForm::default();
    form.email = args.email;
    form.password = args.password;
    form.confirm_password = args.confirm_password;
    form.set_display_name(args.display_name);
    if let Some(slug) = args.slug {
        if !form.set_slug(slug) {
            warn!(
                "Slug format looks invalid (lowercase letters, digits and hyphens, min {} chars)",
                MIN_SLUG_LEN
            );
        }
    }
    form.instagram_handle = args.instagram.unwrap_or_default();
    form.bio = args.bio.unwrap_or_default();

    let payload = form.validate()?;

    let store = SessionStore::new(SessionStore::default_path());
    let client = ApiClient::new(base_url, store.load().map(|s| s.token));
    let auth = client.register(&payload).await?;

    let session = Session {
        token: auth.token,
        creator: auth.creator,
    };
    store.save(&session)?;
    info!("Session stored at {}", store.path().display());

    println!(
        "Welcome, {}! Your page is live at /{}",
        session.creator.display_name, session.creator.slug
    );
    Ok(())
}

pub async fn login(base_url: &str, args: LoginArgs) -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    let client = ApiClient::new(base_url, store.load().map(|s| s.token));

    let auth = client
        .login(&LoginRequest {
            email: args.email,
            password: args.password,
        })
        .await?;

    let session = Session {
        token: auth.token,
        creator: auth.creator,
    };
    store.save(&session)?;
    info!("Session stored at {}", store.path().display());

    println!("Signed in as {} (/{})", session.creator.display_name, session.creator.slug);
    Ok(())
}

pub fn logout() -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    store.clear()?;
    println!("Signed out.");
    Ok(())
}

pub fn whoami() -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    let Some(session) = store.load() else {
        return Err(LOGIN_HINT.into());
    };

    // Cached profile only; the dashboard re-fetches nothing for the header.
    let creator = &session.creator;
    println!("{} (/{})", creator.display_name, creator.slug);
    if let Some(handle) = creator.instagram_handle.as_deref().filter(|h| !h.is_empty()) {
        println!("@{handle}");
    }
    println!(
        "{} recommendations, {} page views",
        creator.total_recommendations, creator.total_page_views
    );
    Ok(())
}

pub async fn add(base_url: &str, args: AddArgs) -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    let Some(session) = store.load() else {
        return Err(LOGIN_HINT.into());
    };

    let form = RecommendationForm {
        dish_name: args.dish,
        restaurant_name: args.restaurant,
        area: args.area.unwrap_or_default(),
        full_address: args.address.unwrap_or_default(),
        google_maps_url: args.maps_url.unwrap_or_default(),
        creator_quote: args.quote.unwrap_or_default(),
        description: args.description.unwrap_or_default(),
        dish_category: args.category,
        cuisine_type: args.cuisine,
        meal_type: args.meal,
        price_range: args.price,
        tags: args.tags.unwrap_or_default(),
    };
    let payload = form.validate()?;

    let client = ApiClient::new(base_url, Some(session.token));
    let created = client.create_recommendation(&payload).await?;

    println!(
        "Created #{}: {} at {}",
        created.id, created.dish_name, created.restaurant_name
    );
    Ok(())
}

pub async fn list(base_url: &str, cfg: &ClientConfig, args: PageArgs) -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    let Some(session) = store.load() else {
        return Err(LOGIN_HINT.into());
    };

    let client = ApiClient::new(base_url, Some(session.token));
    let size = args.size.unwrap_or(cfg.api.page_size);
    let recommendations = client.my_recommendations(args.page, size).await?;

    if recommendations.is_empty() {
        println!("No recommendations yet. Publish one with `crave-client add`.");
        return Ok(());
    }
    for rec in &recommendations {
        print_own_recommendation(rec);
    }
    Ok(())
}

pub async fn view(base_url: &str, cfg: &ClientConfig, args: ViewArgs) -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    let client = ApiClient::new(base_url, store.load().map(|s| s.token));
    let session_id = new_session_id();

    let creator = match client.creator_by_slug(&args.slug).await {
        Ok(creator) => creator,
        Err(ApiError::NotFound) => {
            println!("Creator not found.");
            println!("This creator doesn't exist or has been removed.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let sink = AnalyticsSink::new(client.clone());
    sink.send(TrackEventRequest::page_view(&args.slug, &session_id));

    let size = args.pagination.size.unwrap_or(cfg.api.page_size);
    let recommendations = client
        .public_recommendations(&args.slug, args.pagination.page, size)
        .await?;

    print_creator(&creator);

    let query = args.query.as_deref().unwrap_or("");
    if !query.is_empty() {
        sink.send(TrackEventRequest::search(&args.slug, query, &session_id));
    }
    let filtered = filter_recommendations(&recommendations, query);

    if !query.is_empty() {
        let plural = if filtered.len() == 1 { "" } else { "s" };
        println!(
            "Showing {} recommendation{} for \"{}\"",
            filtered.len(),
            plural,
            query
        );
        println!();
    }

    if filtered.is_empty() {
        println!("No recommendations found.");
    } else {
        for rec in &filtered {
            print_public_recommendation(rec);
        }
    }

    sink.drain().await;
    Ok(())
}

pub async fn open(base_url: &str, cfg: &ClientConfig, args: OpenArgs) -> DynResult<()> {
    let store = SessionStore::new(SessionStore::default_path());
    let client = ApiClient::new(base_url, store.load().map(|s| s.token));
    let session_id = new_session_id();

    let rec = match find_recommendation(&client, &args.slug, args.id, cfg.api.page_size).await {
        Ok(Some(rec)) => rec,
        Ok(None) => {
            println!("Recommendation not found.");
            return Ok(());
        }
        Err(ApiError::NotFound) => {
            println!("Creator not found.");
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let sink = AnalyticsSink::new(client.clone());
    let url = if args.maps {
        let Some(url) = rec.google_maps_url.clone() else {
            return Err(format!("#{} has no maps link", rec.id).into());
        };
        sink.send(TrackEventRequest::maps_click(&args.slug, rec.id, &session_id));
        url
    } else {
        let Some(url) = rec.instagram_url.clone() else {
            return Err(format!("#{} has no instagram link", rec.id).into());
        };
        sink.send(TrackEventRequest::instagram_click(&args.slug, rec.id, &session_id));
        url
    };

    println!("{url}");
    sink.drain().await;
    Ok(())
}

/// Walk the public pages until the id shows up or the listing runs out.
async fn find_recommendation(
    client: &ApiClient,
    slug: &str,
    id: i64,
    page_size: u32,
) -> Result<Option<Recommendation>, ApiError> {
    let mut page = 0;
    loop {
        let batch = client.public_recommendations(slug, page, page_size).await?;
        let batch_len = batch.len();
        if let Some(rec) = batch.into_iter().find(|rec| rec.id == id) {
            return Ok(Some(rec));
        }
        if batch_len < page_size as usize {
            return Ok(None);
        }
        page += 1;
    }
}

fn print_creator(creator: &Creator) {
    println!("{}", creator.display_name);
    if let Some(handle) = creator.instagram_handle.as_deref().filter(|h| !h.is_empty()) {
        println!("@{handle} (https://instagram.com/{handle})");
    }
    if let Some(bio) = creator.bio.as_deref().filter(|b| !b.is_empty()) {
        println!("{bio}");
    }
    println!(
        "{} recommendations, {} page views",
        creator.total_recommendations, creator.total_page_views
    );
    println!();
}

fn print_public_recommendation(rec: &Recommendation) {
    println!("#{} {} at {}", rec.id, rec.dish_name, rec.restaurant_name);
    if !rec.area.is_empty() {
        println!("    {}", rec.area);
    }
    if let Some(quote) = rec.creator_quote.as_deref() {
        println!("    \"{quote}\"");
    }
    let labels: Vec<&str> = [
        rec.dish_category.map(|v| v.as_str()),
        rec.cuisine_type.map(|v| v.as_str()),
        rec.meal_type.map(|v| v.as_str()),
        rec.price_range.map(|v| v.as_str()),
    ]
    .into_iter()
    .flatten()
    .collect();
    if !labels.is_empty() {
        println!("    [{}]", labels.join(", "));
    }
    if !rec.tags.is_empty() {
        println!("    tags: {}", rec.tags.join(", "));
    }
}

fn print_own_recommendation(rec: &Recommendation) {
    println!("#{} {} at {}", rec.id, rec.dish_name, rec.restaurant_name);
    if !rec.area.is_empty() {
        println!("    {}", rec.area);
    }
    if let Some(quote) = rec.creator_quote.as_deref() {
        println!("    \"{quote}\"");
    }
    println!(
        "    {} views, {} instagram clicks, {} maps clicks, {} saves",
        rec.view_count, rec.instagram_clicks, rec.maps_clicks, rec.save_count
    );
}
