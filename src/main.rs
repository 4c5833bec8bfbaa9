use std::{collections::HashMap, time::Instant};
use clap::Parser;
use dotenv::dotenv;
use log::*;
use anyhow::Result;

use ml_stats::{api, health, resources, utility, Opts, Report};
use ml_stats::api::MarkLogicApi;
use ml_stats::transport::{ReqwestTransport, TransportSettings};

fn main() -> Result<()>
{
    env_logger::init();
    let timer = Instant::now();
    dotenv().ok();
    let options = Opts::parse();

    let mut changed_options = HashMap::new();
    let api_url = utility::set_api_url(&options.api_url, &mut changed_options);
    let settings = TransportSettings {
        username: utility::set_username(&options.username, &mut changed_options),
        password: utility::set_password(&options.password),
        accept_invalid_certs: options.accept_invalid_certs,
        timeout: utility::set_timeout(&options.timeout, &mut changed_options)?,
    };
    let transport = ReqwestTransport::new(&settings)?;
    let marklogic_api = MarkLogicApi::new(transport, &api_url);

    match options.report() {
        Report::Resources => resources::print_resources(&marklogic_api, &options)?,
        Report::Health => health::print_health(&marklogic_api)?,
        Report::Status => api::print_status(&marklogic_api, &options)?,
        Report::Requests => api::print_requests(&marklogic_api, &options)?,
        Report::Storage => api::print_storage(&marklogic_api, &options)?,
    }

    utility::dotenv_writer(options.write_dotenv, changed_options)?;

    info!("total time: {:?}", timer.elapsed());
    Ok(())
}
