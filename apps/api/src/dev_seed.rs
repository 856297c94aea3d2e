//! Sample data for fresh local checkouts.

use rosterly_application::UserService;
use rosterly_core::AppResult;
use rosterly_domain::NewUser;
use tracing::info;

/// Seeds three sample users when the store is empty.
pub async fn run(user_service: &UserService) -> AppResult<()> {
    if user_service.list(0).await?.total_pages > 0 {
        info!("store already holds users, skipping dev seed");
        return Ok(());
    }

    let samples = sample_users();
    let seeded = samples.len();

    for input in samples {
        user_service.create(input).await?;
    }

    info!(count = seeded, "seeded sample users");
    Ok(())
}

fn sample_users() -> Vec<NewUser> {
    vec![
        NewUser {
            first_name: "Ada".to_owned(),
            last_name: "Lovelace".to_owned(),
            height: 168.0,
            weight: 58.0,
            address: "12 St James's Square, London".to_owned(),
            photo: "https://example.com/photos/ada.png".to_owned(),
        },
        NewUser {
            first_name: "Alan".to_owned(),
            last_name: "Turing".to_owned(),
            height: 178.0,
            weight: 70.0,
            address: "43 Adlington Road, Wilmslow".to_owned(),
            photo: "https://example.com/photos/alan.png".to_owned(),
        },
        NewUser {
            first_name: "Grace".to_owned(),
            last_name: "Hopper".to_owned(),
            height: 160.0,
            weight: 55.0,
            address: "1304 30th Street NW, Washington".to_owned(),
            photo: String::new(),
        },
    ]
}
