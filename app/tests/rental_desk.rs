use rust_decimal_macros::dec;
use time::macros::datetime;
use time::OffsetDateTime;

use app::AppModule;
use application::service::{
    AddCustomerService, AddMovieService, GetCustomerService, GetMovieService,
    ListAvailableMoviesService, RemoveMovieService, RentMoviesService, ReturnRentalService,
    UpdateInventoryService,
};
use application::transfer::{
    CreateCustomerDto, CreateMovieDto, CreateRentalDto, DeleteMovieDto, GetCustomerDto,
    GetMovieDto, ReturnRentalDto, UpdateInventoryDto,
};
use kernel::prelude::entity::{
    Customer, CustomerId, CustomerLastName, CustomerName, Movie, MovieId, MovieName, MoviePrice,
    MovieStock, RentedCopies,
};
use kernel::KernelError;

const RENT_DATE: OffsetDateTime = datetime!(2024-03-01 10:00 UTC);

fn movie(id: i64, stock: u32, rented: u32) -> Movie {
    Movie::new(
        Some(MovieId::new(id)),
        MovieName::new(format!("movie {id}")),
        MovieStock::new(stock),
        RentedCopies::new(rented),
        MoviePrice::new(dec!(2.99)).unwrap(),
    )
    .unwrap()
}

fn customer(id: i64) -> Customer {
    Customer::new(
        Some(CustomerId::new(id)),
        CustomerName::new("Jane"),
        CustomerLastName::new("Doe"),
    )
}

fn shelf() -> AppModule {
    AppModule::with_catalog((1..=5).map(|id| movie(id, 5, 0)), [customer(1)])
}

fn rent(movie_ids: Vec<i64>, days: i64) -> CreateRentalDto {
    CreateRentalDto {
        customer_id: 1,
        movie_ids,
        days,
        rent_date: RENT_DATE,
    }
}

#[tokio::test]
async fn lists_every_movie_on_the_shelf() -> error_stack::Result<(), KernelError> {
    let module = shelf();
    let movies = module.list_available_movies().await?;
    assert_eq!(movies.keys().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    assert!(movies.values().all(|movie| movie.available == 5));
    Ok(())
}

#[tokio::test]
async fn fully_rented_movies_are_not_listed() -> error_stack::Result<(), KernelError> {
    let module = AppModule::with_movies([movie(1, 2, 2), movie(2, 1, 1), movie(3, 0, 0)]);
    assert!(module.list_available_movies().await?.is_empty());

    let module = AppModule::new();
    assert!(module.list_available_movies().await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn add_movie_takes_next_free_id() -> error_stack::Result<(), KernelError> {
    let module = shelf();
    let id = module
        .add_movie(CreateMovieDto {
            id: None,
            name: "new release".into(),
            stock: 3,
            price_per_day: dec!(4.50),
        })
        .await?;
    assert_eq!(id, 6);

    let movies = module.list_available_movies().await?;
    assert_eq!(movies.len(), 6);
    assert_eq!(movies[&6].name, "new release");
    assert_eq!(movies[&6].available, 3);
    Ok(())
}

#[tokio::test]
async fn add_movie_rejects_negative_price() {
    let module = shelf();
    let report = module
        .add_movie(CreateMovieDto {
            id: None,
            name: "broken".into(),
            stock: 1,
            price_per_day: dec!(-1),
        })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::ForbiddenOperation);
    assert_eq!(module.database().snapshot().await.movies().len(), 5);
}

#[tokio::test]
async fn remove_and_restock_movies() -> error_stack::Result<(), KernelError> {
    let module = shelf();

    module.remove_movie(DeleteMovieDto { id: 2 }).await?;
    assert!(module.get_movie(GetMovieDto { id: 2 }).await?.is_none());
    let report = module
        .remove_movie(DeleteMovieDto { id: 2 })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::NotFound);

    let restocked = module
        .add_to_inventory(UpdateInventoryDto { id: 1, copies: 3 })
        .await?;
    assert_eq!(restocked.stock, 8);
    let reduced = module
        .remove_from_inventory(UpdateInventoryDto { id: 1, copies: 10 })
        .await?;
    assert_eq!(reduced.stock, 0);
    assert_eq!(reduced.available, 0);
    Ok(())
}

#[tokio::test]
async fn rent_then_return_late() -> error_stack::Result<(), KernelError> {
    let module = shelf();

    let rental = module.rent_movies(rent(vec![1, 2, 3], 5)).await?;
    assert_eq!(rental.movie_ids, vec![1, 2, 3]);
    assert_eq!(rental.amount, dec!(44.85));
    assert_eq!(rental.return_date, None);

    let movie = module.get_movie(GetMovieDto { id: 1 }).await?.unwrap();
    assert_eq!(movie.rented, 1);
    assert_eq!(movie.available, 4);

    let customer = module
        .get_customer(GetCustomerDto { id: 1 })
        .await?
        .unwrap();
    assert_eq!(customer.active_rental, Some(rental));

    let returned = module
        .return_rental(ReturnRentalDto {
            customer_id: 1,
            return_date: datetime!(2024-03-08 12:00 UTC),
        })
        .await?;
    assert_eq!(returned.late_fee, dec!(17.94));
    assert_eq!(returned.total_amount, dec!(62.79));

    let movie = module.get_movie(GetMovieDto { id: 1 }).await?.unwrap();
    assert_eq!(movie.available, 5);

    let customer = module
        .get_customer(GetCustomerDto { id: 1 })
        .await?
        .unwrap();
    assert_eq!(customer.active_rental, None);
    assert_eq!(customer.rental_history, vec![returned]);
    Ok(())
}

#[tokio::test]
async fn on_time_return_has_no_fee() -> error_stack::Result<(), KernelError> {
    let module = shelf();
    module.rent_movies(rent(vec![4], 3)).await?;
    let returned = module
        .return_rental(ReturnRentalDto {
            customer_id: 1,
            return_date: datetime!(2024-03-04 09:00 UTC),
        })
        .await?;
    assert_eq!(returned.late_fee, dec!(0));
    assert_eq!(returned.total_amount, dec!(8.97));

    module.rent_movies(rent(vec![4], 1)).await?;
    let customer = module
        .get_customer(GetCustomerDto { id: 1 })
        .await?
        .unwrap();
    assert_eq!(customer.rental_history.len(), 1);
    assert!(customer.active_rental.is_some());
    Ok(())
}

#[tokio::test]
async fn out_of_stock_rent_changes_nothing() {
    let module = AppModule::with_catalog([movie(1, 5, 0), movie(2, 1, 1)], [customer(1)]);

    let report = module
        .rent_movies(rent(vec![1, 2], 2))
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::OutOfStock);

    let store = module.database().snapshot().await;
    let first = store.movies().get(&MovieId::new(1)).unwrap();
    assert_eq!(first.available(), 5);
    let customer = store.customers().get(&CustomerId::new(1)).unwrap();
    assert!(customer.active_rental().is_none());
}

#[tokio::test]
async fn second_rental_is_forbidden() -> error_stack::Result<(), KernelError> {
    let module = shelf();
    module.rent_movies(rent(vec![1], 2)).await?;

    let report = module.rent_movies(rent(vec![2], 2)).await.unwrap_err();
    assert_eq!(report.current_context(), &KernelError::ForbiddenOperation);

    let movie = module.get_movie(GetMovieDto { id: 2 }).await?.unwrap();
    assert_eq!(movie.rented, 0);
    Ok(())
}

#[tokio::test]
async fn unknown_ids_are_not_found() -> error_stack::Result<(), KernelError> {
    let module = shelf();

    let report = module
        .rent_movies(CreateRentalDto {
            customer_id: 9,
            ..rent(vec![1], 2)
        })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::NotFound);

    let report = module.rent_movies(rent(vec![42], 2)).await.unwrap_err();
    assert_eq!(report.current_context(), &KernelError::NotFound);

    let report = module
        .return_rental(ReturnRentalDto {
            customer_id: 1,
            return_date: RENT_DATE,
        })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::Operation);
    Ok(())
}

#[tokio::test]
async fn customers_get_sequential_ids() -> error_stack::Result<(), KernelError> {
    let module = AppModule::new();
    let id = module
        .add_customer(CreateCustomerDto {
            id: None,
            name: "John".into(),
            lastname: "Smith".into(),
        })
        .await?;
    assert_eq!(id, 1);

    let customer = module.get_customer(GetCustomerDto { id }).await?.unwrap();
    assert_eq!(customer.name, "John");
    assert!(customer.rental_history.is_empty());
    Ok(())
}

#[tokio::test]
async fn rented_movie_stays_until_returned() -> error_stack::Result<(), KernelError> {
    let module = shelf();
    module.rent_movies(rent(vec![1], 2)).await?;

    let report = module
        .remove_movie(DeleteMovieDto { id: 1 })
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::Operation);
    assert!(module.get_movie(GetMovieDto { id: 1 }).await?.is_some());

    module
        .return_rental(ReturnRentalDto {
            customer_id: 1,
            return_date: datetime!(2024-03-02 10:00 UTC),
        })
        .await?;
    module.remove_movie(DeleteMovieDto { id: 1 }).await?;
    assert!(module.get_movie(GetMovieDto { id: 1 }).await?.is_none());

    let customer = module
        .get_customer(GetCustomerDto { id: 1 })
        .await?
        .unwrap();
    assert_eq!(customer.active_rental, None);
    assert_eq!(customer.rental_history.len(), 1);
    Ok(())
}

#[tokio::test]
async fn extreme_rentals_fail_cleanly() -> error_stack::Result<(), KernelError> {
    let module = shelf();
    let premium = module
        .add_movie(CreateMovieDto {
            id: None,
            name: "premium".into(),
            stock: 1,
            price_per_day: dec!(100000000000000000000),
        })
        .await?;

    let report = module
        .rent_movies(rent(vec![premium], 1_000_000_000))
        .await
        .unwrap_err();
    assert_eq!(report.current_context(), &KernelError::ForbiddenOperation);
    let movie = module.get_movie(GetMovieDto { id: premium }).await?.unwrap();
    assert_eq!(movie.rented, 0);

    let rental = module
        .rent_movies(rent(vec![1], 1_000_000_000_000_000))
        .await?;
    assert_eq!(rental.amount, dec!(2990000000000000));
    let returned = module
        .return_rental(ReturnRentalDto {
            customer_id: 1,
            return_date: datetime!(2024-03-02 10:00 UTC),
        })
        .await?;
    assert_eq!(returned.late_fee, dec!(0));
    Ok(())
}
