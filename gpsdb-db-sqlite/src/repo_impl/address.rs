use super::*;

impl AddressRepo for DbReadWrite<'_> {
    fn create_address(&self, record: &AddressRecord) -> Result<()> {
        create_address(&mut self.conn.borrow_mut(), record)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
    fn delete_address(&self, id: &str) -> Result<()> {
        delete_address(&mut self.conn.borrow_mut(), id)
    }
}

impl AddressRepo for DbReadOnly<'_> {
    fn create_address(&self, _record: &AddressRecord) -> Result<()> {
        Err(read_only_err())
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        all_addresses(&mut self.conn.borrow_mut())
    }
    fn count_addresses(&self) -> Result<usize> {
        count_addresses(&mut self.conn.borrow_mut())
    }
    fn delete_address(&self, _id: &str) -> Result<()> {
        Err(read_only_err())
    }
}

// Acquires the pool lock separately for each operation.
impl AddressRepo for Connections {
    fn create_address(&self, record: &AddressRecord) -> Result<()> {
        self.exclusive()?.create_address(record)
    }
    fn all_addresses(&self) -> Result<Vec<AddressRecord>> {
        self.shared()?.all_addresses()
    }
    fn count_addresses(&self) -> Result<usize> {
        self.shared()?.count_addresses()
    }
    fn delete_address(&self, id: &str) -> Result<()> {
        self.exclusive()?.delete_address(id)
    }
}

fn create_address(conn: &mut SqliteConnection, record: &AddressRecord) -> Result<()> {
    let (lat, lng) = record.location.to_lat_lng_deg();
    let new_address = models::NewAddress {
        id: record.id.as_str(),
        address: &record.address,
        lat,
        lng,
        created_at: record.created_at.as_millis(),
    };
    diesel::insert_into(schema::addresses::table)
        .values(&new_address)
        .execute(conn)
        .map_err(from_diesel_err)?;
    Ok(())
}

fn all_addresses(conn: &mut SqliteConnection) -> Result<Vec<AddressRecord>> {
    use schema::addresses::dsl;
    dsl::addresses
        .load::<models::AddressEntity>(conn)
        .map_err(from_diesel_err)?
        .into_iter()
        .map(load_address)
        .collect()
}

fn count_addresses(conn: &mut SqliteConnection) -> Result<usize> {
    use schema::addresses::dsl;
    Ok(dsl::addresses
        .select(diesel::dsl::count(dsl::id))
        .first::<i64>(conn)
        .map_err(from_diesel_err)? as usize)
}

fn delete_address(conn: &mut SqliteConnection, id: &str) -> Result<()> {
    use schema::addresses::dsl;
    let count = diesel::delete(dsl::addresses.filter(dsl::id.eq(id)))
        .execute(conn)
        .map_err(from_diesel_err)?;
    if count == 0 {
        log::debug!("No address record with id {id} to delete");
    }
    Ok(())
}

fn load_address(entity: models::AddressEntity) -> Result<AddressRecord> {
    let models::AddressEntity {
        id,
        address,
        lat,
        lng,
        created_at,
    } = entity;
    let location = MapPoint::try_from_lat_lng_deg(lat, lng)
        .ok_or_else(|| anyhow!("Invalid position of address record {id}: {lat},{lng}"))?;
    Ok(AddressRecord {
        id: id.into(),
        address,
        location,
        created_at: Timestamp::from_millis(created_at),
    })
}
