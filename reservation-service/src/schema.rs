diesel::table! {
    graves (id) {
        id -> Uuid,
        plot_type -> Varchar,
        location -> Varchar,
        capacity -> Int4,
        size_m2 -> Numeric,
        description -> Text,
        price -> Numeric,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    reservations (id) {
        id -> Uuid,
        grave_id -> Uuid,
        buyer_id -> Uuid,
        buyer_name -> Varchar,
        buyer_ktp -> Varchar,
        buyer_phone -> Varchar,
        price -> Numeric,
        status -> Varchar,
        paid_at -> Nullable<Timestamptz>,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}

diesel::table! {
    payments (id) {
        id -> Uuid,
        reservation_id -> Uuid,
        method -> Varchar,
        account_name -> Varchar,
        account_number -> Varchar,
        attachment -> Bytea,
        attachment_type -> Nullable<Varchar>,
        created_at -> Nullable<Timestamptz>,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    graves,
    reservations,
    payments,
);
