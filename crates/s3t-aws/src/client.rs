//! AWS client construction

use aws_config::meta::region::RegionProviderChain;
use aws_config::BehaviorVersion;
use aws_sdk_s3tables::config::Region;
use aws_sdk_s3tables::Client;
use s3t_core::config::AwsConfig;
use tracing::debug;

/// Build an S3 Tables client from the effective AWS settings
///
/// Unset fields fall back to the SDK default chains: credentials and region
/// come from the environment, shared config files or instance metadata.
pub async fn load_client(config: &AwsConfig) -> Client {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    if let Some(profile) = &config.profile {
        loader = loader.profile_name(profile);
    }

    let region_provider = match &config.region {
        Some(region) => RegionProviderChain::first_try(Region::new(region.clone())),
        None => RegionProviderChain::default_provider(),
    };
    loader = loader.region(region_provider);

    let sdk_config = loader.load().await;
    let mut builder = aws_sdk_s3tables::config::Builder::from(&sdk_config);

    if let Some(endpoint) = &config.endpoint_url {
        builder = builder.endpoint_url(endpoint);
    }

    debug!(
        profile = ?config.profile,
        region = ?sdk_config.region(),
        endpoint = ?config.endpoint_url,
        "Built S3 Tables client"
    );

    Client::from_conf(builder.build())
}
