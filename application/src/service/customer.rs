use error_stack::Report;
use tracing::{info, warn};

use kernel::interface::database::{DatabaseConnection, DependOnDatabaseConnection, Transaction};
use kernel::interface::repository::{DependOnCustomerRepository, Repository};
use kernel::prelude::entity::{Customer, CustomerId, CustomerLastName, CustomerName};
use kernel::KernelError;

use crate::transfer::{CreateCustomerDto, CustomerDto, GetCustomerDto};

#[async_trait::async_trait]
pub trait GetCustomerService: 'static + Sync + Send + DependOnCustomerRepository {
    async fn get_customer(
        &self,
        dto: GetCustomerDto,
    ) -> error_stack::Result<Option<CustomerDto>, KernelError> {
        let id = CustomerId::new(dto.id);
        async move {
            let mut connection = self.database_connection().transact().await?;
            let customer = self.customer_repository().get(&mut connection, &id).await?;
            customer.map(CustomerDto::try_from).transpose()
        }
        .await
        .inspect_err(|report| warn!("Lookup of customer {} failed: {report:?}", id.as_ref()))
    }
}

impl<T> GetCustomerService for T where T: DependOnCustomerRepository {}

#[async_trait::async_trait]
pub trait AddCustomerService: 'static + Sync + Send + DependOnCustomerRepository {
    async fn add_customer(&self, dto: CreateCustomerDto) -> error_stack::Result<i64, KernelError> {
        let id = async move {
            let mut connection = self.database_connection().transact().await?;

            let customer = Customer::new(
                dto.id.map(CustomerId::new),
                CustomerName::new(dto.name),
                CustomerLastName::new(dto.lastname),
            );
            let id = self
                .customer_repository()
                .add(&mut connection, customer)
                .await?;
            connection.commit().await?;
            Ok::<_, Report<KernelError>>(id)
        }
        .await
        .inspect_err(|report| warn!("Customer was not added: {report:?}"))?;

        info!("Added customer {}", id.as_ref());
        Ok(id.into())
    }
}

impl<T> AddCustomerService for T where T: DependOnCustomerRepository {}

pub(crate) async fn find_customer<T: DependOnCustomerRepository + ?Sized>(
    module: &T,
    connection: &mut <T::DatabaseConnection as DatabaseConnection>::Transaction,
    id: &CustomerId,
) -> error_stack::Result<Customer, KernelError> {
    module
        .customer_repository()
        .get(connection, id)
        .await?
        .ok_or_else(|| {
            Report::new(KernelError::NotFound)
                .attach_printable(format!("Customer {} not found", id.as_ref()))
        })
}
