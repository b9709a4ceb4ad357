//! Customer resolver service: connects once, then serves field invocations.

use hub_core::{anyhow::Context as AnyhowContext, prelude::*};
use naas_customer_resolver::{
    db::Connection, resolver::CustomerResolver, routes, store::DbCustomerStore, AppState, Args,
};
use poem::{listener::TcpListener, Server};

pub fn main() {
    let opts = hub_core::StartConfig {
        service_name: "naas-customer-resolver",
    };

    hub_core::run(opts, |common, args| {
        let Args { port, db } = args;

        common.rt.block_on(async move {
            let connection = Connection::new(db)
                .await
                .context("failed to get database connection")?;

            let resolver = CustomerResolver::new(DbCustomerStore::new(connection));
            let state = AppState::new(resolver);

            info!(port, "customer resolver listening");

            Server::new(TcpListener::bind(format!("0.0.0.0:{port}")))
                .run(routes(state))
                .await
                .context("failed to build rest api server")
        })
    });
}
