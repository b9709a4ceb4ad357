mod customer;

#[derive(async_graphql::MergedObject, Default)]
pub struct Mutation(customer::Mutation);
