mod point_group;
