///////////////////////////////////////////////////////////////////////
// Addresses
///////////////////////////////////////////////////////////////////////

table! {
    addresses (id) {
        id -> Text,
        address -> Text,
        lat -> Double,
        lng -> Double,
        created_at -> BigInt,
    }
}
