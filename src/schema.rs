diesel::table! {
    bookings (id) {
        id -> Uuid,
        name -> Varchar,
        email -> Varchar,
        phone -> Varchar,
        vehicle -> Varchar,
        registration -> Varchar,
        date -> Varchar,
        time -> Varchar,
        notes -> Nullable<Varchar>,
    }
}
